pub mod analysis;
pub mod cutoff;
pub mod definition;
pub mod question;
pub mod risk;
pub mod scale;

pub use analysis::AnalysisTemplate;
pub use cutoff::TestCutoff;
pub use definition::{AnalysisType, TestDefinition};
pub use question::{TestOption, TestQuestion};
pub use risk::{RiskRule, RiskSeverity};
pub use scale::TestScale;
