mod groups_tests;
mod predicates_tests;
mod quantifiers_tests;
mod sequences_tests;
mod trivia_tests;
