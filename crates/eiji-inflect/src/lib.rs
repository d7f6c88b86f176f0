pub mod adjective;
pub mod generator;
pub mod highlight;
pub mod linguistics;
pub mod noun;
pub mod plurals;
pub mod rules;
pub mod verb;

pub use generator::InflectionGenerator;
pub use highlight::Highlighter;
pub use linguistics::{AdjectiveForms, Linguistics, VerbForms};
pub use plurals::PluralOverrides;
pub use rules::EnglishRules;
