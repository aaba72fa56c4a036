pub mod confirmation;
pub mod loaders;
pub mod module;
pub mod question;
pub mod question_type;

pub use confirmation::DeleteConfirmation;
pub use loaders::{load_all_toml_files, load_toml_to_questions, parse_question_bank};
pub use module::{ModuleFilter, PteModule};
pub use question::{
    parse_tags, Difficulty, Question, QuestionBankFile, QuestionOption, QuestionPayload,
    QuestionStatus, SaveMode,
};
pub use question_type::{QuestionTypeInfo, QuestionTypeSlug};
