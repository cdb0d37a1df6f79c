use std::path::{Path, PathBuf};

/// One table of the generated document and the directories feeding it.
#[derive(Debug, Clone, Copy)]
pub struct ParamCategory {
    /// Subsection title.
    pub heading: &'static str,

    /// Header of the first table column.
    pub column_label: &'static str,

    /// Directories below the parameter root, `/`-separated.
    pub subdirs: &'static [&'static str],
}

impl ParamCategory {
    /// Resolve the category's directories against a parameter root.
    pub fn subdir_paths(&self, root: &Path) -> Vec<PathBuf> {
        self.subdirs
            .iter()
            .map(|subdir| {
                subdir
                    .split('/')
                    .fold(root.to_path_buf(), |path, segment| path.join(segment))
            })
            .collect()
    }
}

pub const CLASSIFIERS: ParamCategory = ParamCategory {
    heading: "Classifiers, Parameters, and Parameter Ranges",
    column_label: "Classifier",
    subdirs: &["base", "ensemble", "meta"],
};

pub const ATTRIBUTE_SEARCHES: ParamCategory = ParamCategory {
    heading: "Attribute Searches, Parameters, and Parameter Ranges",
    column_label: "Attribute Search",
    subdirs: &["attribselection/search"],
};

pub const ATTRIBUTE_EVALUATIONS: ParamCategory = ParamCategory {
    heading: "Attribute Evaluations, Parameters, and Parameter Ranges",
    column_label: "Attribute Evaluation",
    subdirs: &["attribselection/eval"],
};

/// Categories in document order.
pub const CATEGORIES: [ParamCategory; 3] = [CLASSIFIERS, ATTRIBUTE_SEARCHES, ATTRIBUTE_EVALUATIONS];
