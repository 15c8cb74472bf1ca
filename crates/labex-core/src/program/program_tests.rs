use indoc::indoc;

use crate::program::{CaptureId, LabelTest, Program, ProgramParts, SlotId, Step, StepId, dump};
use crate::{Colors, LabelTypeId};

fn test(ty: u32, name: &str) -> LabelTest {
    LabelTest {
        ty: LabelTypeId::new(ty),
        type_name: name.to_owned(),
        predicates: Vec::new(),
    }
}

/// `w:Blah? Foo[^Bar]`
fn sample() -> Program {
    let s = StepId::new;
    Program::from_parts(ProgramParts {
        source: "w:Blah? Foo[^Bar]".into(),
        steps: vec![
            Step::Accept,
            Step::Contains {
                slot: SlotId::new(0),
                test: test(2, "Bar"),
                next: s(0),
            },
            Step::Label {
                test: test(1, "Foo"),
                capture: None,
                next: s(1),
            },
            Step::Save {
                slot: SlotId::new(0),
                next: s(2),
            },
            Step::Label {
                test: test(0, "Blah"),
                capture: Some(CaptureId::new(0)),
                next: s(3),
            },
            Step::Split {
                primary: s(4),
                alternate: s(3),
            },
        ],
        entry: Some(s(5)),
        slot_count: 1,
        captures: vec!["w".into()],
        leading: Some(vec![s(4), s(2)]),
    })
}

#[test]
fn dump_lists_steps() {
    let out = dump(&sample(), Colors::OFF);

    assert_eq!(
        out,
        indoc! {"
            [captures]
            C0 = w

            [leading]
            04 02

            [steps]
              00  accept
              01  contains s0 Bar -> 00
              02  label Foo -> 01
              03  save s0 -> 02
              04  label Blah @w -> 03
            > 05  split 04 | 03
        "}
    );
}

#[test]
fn dump_marks_nullable_programs() {
    let program = Program::from_parts(ProgramParts::default());

    assert_eq!(
        dump(&program, Colors::OFF),
        indoc! {"
            [leading]
            (nullable)

            [steps]
            > 00  accept
        "}
    );
}

#[test]
fn referenced_types_are_sorted_and_unique() {
    let program = sample();

    assert_eq!(
        program.referenced_types(),
        &[LabelTypeId::new(0), LabelTypeId::new(1), LabelTypeId::new(2)]
    );
    assert_eq!(program.entry(), StepId::new(5));
    assert_eq!(program.capture_name(CaptureId::new(0)), "w");
    assert_eq!(program.source(), "w:Blah? Foo[^Bar]");
}

#[test]
fn empty_parts_accept_immediately() {
    let program = Program::from_parts(ProgramParts::default());

    assert_eq!(program.len(), 1);
    assert!(matches!(program.step(program.entry()), Step::Accept));
    assert!(program.leading().is_none());
    assert!(program.referenced_types().is_empty());
}

#[test]
#[should_panic(expected = "jumps to missing step")]
fn dangling_successor_panics() {
    Program::from_parts(ProgramParts {
        steps: vec![Step::Split {
            primary: StepId::new(0),
            alternate: StepId::new(7),
        }],
        ..Default::default()
    });
}

#[test]
#[should_panic(expected = "uses slot")]
fn missing_slot_panics() {
    Program::from_parts(ProgramParts {
        steps: vec![
            Step::Accept,
            Step::Save {
                slot: SlotId::new(0),
                next: StepId::new(0),
            },
        ],
        entry: Some(StepId::new(1)),
        ..Default::default()
    });
}
