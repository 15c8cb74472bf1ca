use labex_core::Colors;

use super::test_utils::{document, program, text_label};
use super::{PrintTracer, Searcher, Verbosity};

const KINASE: &str = "kinase";
const BRCA: &str = "BRCA";

#[test]
fn backtracks_into_alternation() {
    let program = program("Gene | Protein");
    let doc = document(KINASE, vec![text_label(KINASE, "Protein", 0, 6)]);
    let mut searcher = Searcher::new(&program, &doc);
    let mut tracer = PrintTracer::new(&program, KINASE, Verbosity::Default, Colors::OFF);

    assert!(searcher.search_with(&mut tracer).unwrap());

    insta::assert_snapshot!(tracer.output(), @r"
    attempt 0
      03  split 01 | 02
      01  label Gene -> 00
          ○ Gene from 0
      03 ❮❮❮
      02  label Protein -> 00
          ● Protein [0, 6)
      00  accept
    match [0, 6)
    ");
}

#[test]
fn reports_exhaustion_after_last_attempt() {
    let program = program("Gene | Protein");
    let doc = document(KINASE, vec![text_label(KINASE, "Protein", 0, 6)]);
    let mut searcher = Searcher::new(&program, &doc);
    let mut tracer = PrintTracer::new(&program, KINASE, Verbosity::Default, Colors::OFF);

    assert!(searcher.search_with(&mut tracer).unwrap());
    assert!(!searcher.search_with(&mut tracer).unwrap());

    let second: Vec<&str> = tracer
        .lines()
        .iter()
        .skip_while(|line| !line.is_empty())
        .map(String::as_str)
        .collect();
    assert_eq!(
        second,
        [
            "",
            "attempt 6",
            "  03  split 01 | 02",
            "  01  label Gene -> 00",
            "      ○ Gene from 6",
            "  03 ❮❮❮",
            "  02  label Protein -> 00",
            "      ○ Protein from 6",
            "no match",
            "exhausted",
        ]
    );
}

#[test]
fn verbose_shows_text_and_effects() {
    let program = program("x:Gene");
    let doc = document(BRCA, vec![text_label(BRCA, "Gene", 0, 4)]);
    let mut searcher = Searcher::new(&program, &doc);
    let mut tracer = PrintTracer::new(&program, BRCA, Verbosity::Verbose, Colors::OFF);

    assert!(searcher.search_with(&mut tracer).unwrap());

    insta::assert_snapshot!(tracer.output(), @r"
    attempt 0
      01  label Gene @x -> 00
          ● Gene [0, 4) BRCA
          ⬥ @x = [0, 4)
      00  accept
    match [0, 4)
    ");
}

#[test]
fn default_verbosity_hides_effects() {
    let program = program("x:Gene");
    let doc = document(BRCA, vec![text_label(BRCA, "Gene", 0, 4)]);
    let mut searcher = Searcher::new(&program, &doc);
    let mut tracer = PrintTracer::new(&program, BRCA, Verbosity::Default, Colors::OFF);

    assert!(searcher.search_with(&mut tracer).unwrap());

    assert!(tracer.lines().iter().all(|line| !line.contains('⬥')));
    assert!(tracer.lines().contains(&"      ● Gene [0, 4)".to_owned()));
}

#[test]
fn very_verbose_shows_checkpoints() {
    let program = program("Gene?");
    let doc = document(BRCA, vec![text_label(BRCA, "Gene", 0, 4)]);
    let mut searcher = Searcher::new(&program, &doc);
    let mut tracer = PrintTracer::new(&program, BRCA, Verbosity::VeryVerbose, Colors::OFF);

    assert!(searcher.search_with(&mut tracer).unwrap());

    insta::assert_snapshot!(tracer.output(), @r"
    attempt 0
      02  split 01 | 00
          ◇ checkpoint #1
      01  label Gene -> 00
          ● Gene [0, 4) BRCA
      00  accept
    match [0, 4)
    ");
}

#[test]
fn very_verbose_shows_possessive_cut() {
    let program = program("Gene?+");
    let doc = document(BRCA, vec![text_label(BRCA, "Gene", 0, 4)]);
    let mut searcher = Searcher::new(&program, &doc);
    let mut tracer = PrintTracer::new(&program, BRCA, Verbosity::VeryVerbose, Colors::OFF);

    assert!(searcher.search_with(&mut tracer).unwrap());

    let output = tracer.output();
    assert!(output.contains("      ✂ dropped 1 checkpoints"), "{output}");
}

#[test]
fn long_label_text_is_truncated() {
    let text = "a".repeat(40);
    let program = program("Gene");
    let doc = document(&text, vec![text_label(&text, "Gene", 0, 40)]);
    let mut searcher = Searcher::new(&program, &doc);
    let mut tracer = PrintTracer::new(&program, &text, Verbosity::Verbose, Colors::OFF);

    assert!(searcher.search_with(&mut tracer).unwrap());

    let expected = format!("      ● Gene [0, 40) {}…", "a".repeat(31));
    assert!(tracer.lines().contains(&expected), "{:#?}", tracer.lines());
}
