//! Domain types shared by every front end.

pub mod message;
pub mod types;

pub use message::{ChatLog, ChatMessage, MessageRole, Scroll};
pub use types::{AnalysisRequest, AnalysisResponse, ChartType, ParseChartTypeError};
