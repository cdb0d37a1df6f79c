pub mod categories;
pub mod discovery;
pub mod grammar;

pub use categories::{ParamCategory, CATEGORIES};
pub use discovery::{
    collect_category, collect_sections, discover_param_files, entity_name, load_param_file,
    parse_declarations, CategorySection,
};
pub use grammar::parse_declaration;
