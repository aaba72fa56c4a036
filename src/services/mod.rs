pub mod question_bank;
pub mod question_service;
pub mod repository;

pub use question_bank::{BankStats, QuestionBank, QuestionFilter};
pub use question_service::QuestionService;
pub use repository::QuestionRepository;
