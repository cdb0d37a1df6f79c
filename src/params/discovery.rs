use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::error::{Result, ToolError};
use crate::models::{ParameterDeclaration, ParameterFile};
use crate::params::categories::{ParamCategory, CATEGORIES};
use crate::params::grammar::parse_declaration;

/// Extension of declaration files.
const PARAMS_EXTENSION: &str = ".params";

/// Line marker after which a file only holds conditionals.
const CONDITIONALS_MARKER: &str = "Conditionals";

/// Parsed files of one category, in discovery order.
#[derive(Debug, Clone)]
pub struct CategorySection {
    pub category: ParamCategory,
    pub files: Vec<ParameterFile>,
}

/// List the `.params` files of a category.
///
/// Each subdirectory is scanned non-recursively and sorted by file name.
/// Missing subdirectories contribute nothing.
pub fn discover_param_files(root: &Path, category: &ParamCategory) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for dir in category.subdir_paths(root) {
        if !dir.is_dir() {
            debug!(dir = %dir.display(), "parameter directory not found, skipping");
            continue;
        }

        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry?;
            if is_param_file(&entry) {
                files.push(entry.into_path());
            }
        }
    }

    Ok(files)
}

/// Regular, non-dot files ending in `.params`.
fn is_param_file(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    entry.file_type().is_file() && name.ends_with(PARAMS_EXTENSION) && !name.starts_with('.')
}

/// Entity name of a declaration file: the segment before the extension.
///
/// `weka.classifiers.bayes.NaiveBayes.params` gives `NaiveBayes`.
pub fn entity_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let segments: Vec<&str> = file_name.split('.').collect();
    match segments.len() {
        0 | 1 => file_name.clone(),
        n => segments[n - 2].to_string(),
    }
}

/// Parse declarations from file contents, stopping at the conditionals marker.
pub fn parse_declarations(text: &str) -> Vec<ParameterDeclaration> {
    text.lines()
        .take_while(|line| !line.contains(CONDITIONALS_MARKER))
        .filter_map(|line| {
            let decl = parse_declaration(line);
            if decl.is_none() && !line.trim().is_empty() {
                trace!(line, "line skipped");
            }
            decl
        })
        .collect()
}

/// Read and parse one declaration file.
pub fn load_param_file(path: &Path) -> Result<ParameterFile> {
    let bytes = fs::read(path).map_err(|source| ToolError::ParamFile {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);

    Ok(ParameterFile {
        path: path.to_path_buf(),
        entity_name: entity_name(path),
        declarations: parse_declarations(&text),
    })
}

/// Discover and parse every file of one category.
pub fn collect_category(root: &Path, category: &ParamCategory) -> Result<CategorySection> {
    let files = discover_param_files(root, category)?
        .iter()
        .map(|path| load_param_file(path))
        .collect::<Result<Vec<_>>>()?;

    for file in &files {
        trace!(
            path = %file.path.display(),
            entity = %file.entity_name,
            declarations = file.declarations.len(),
            "parameter file loaded"
        );
    }

    debug!(
        category = category.column_label,
        files = files.len(),
        declarations = files.iter().map(|f| f.declarations.len()).sum::<usize>(),
        "category collected"
    );

    Ok(CategorySection {
        category: *category,
        files,
    })
}

/// Collect all categories in document order.
pub fn collect_sections(root: &Path) -> Result<Vec<CategorySection>> {
    CATEGORIES
        .iter()
        .map(|category| collect_category(root, category))
        .collect()
}
