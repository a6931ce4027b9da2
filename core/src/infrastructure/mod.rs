pub mod llm;
pub mod social;
