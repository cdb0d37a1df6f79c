use std::io::Write;

use crate::error::Result;
use crate::models::ParameterFile;
use crate::params::{CategorySection, ParamCategory};

const DOCUMENT_TITLE: &str = r"\section{Auto-WEKA Configuration Space}";

/// Write the full configuration-space document, one table per section.
pub fn write_document<W: Write>(out: &mut W, sections: &[CategorySection]) -> Result<()> {
    writeln!(out, "{}", DOCUMENT_TITLE)?;
    writeln!(out)?;

    for section in sections {
        write_table(out, &section.category, &section.files)?;
    }

    out.flush()?;
    Ok(())
}

/// Write one `longtabu` table: header, rows per file, footer.
pub fn write_table<W: Write>(
    out: &mut W,
    category: &ParamCategory,
    files: &[ParameterFile],
) -> Result<()> {
    writeln!(out, r"\subsection{{{}}}", category.heading)?;
    writeln!(out)?;
    write_table_header(out, category.column_label)?;

    for file in files {
        write_file_rows(out, file)?;
    }

    writeln!(out, r"\end{{longtabu}}")?;
    writeln!(out)?;
    Ok(())
}

fn write_table_header<W: Write>(out: &mut W, column_label: &str) -> Result<()> {
    writeln!(out, r"\begin{{longtabu}} to 1.2\linewidth {{XXXX}}")?;
    writeln!(out, r"\toprule")?;
    writeln!(
        out,
        r"\rowfont\bfseries {} & Parameter & Value Range & Default\\",
        column_label
    )?;
    writeln!(out, r"\\\midrule")?;
    writeln!(out, r"\endhead")?;
    writeln!(out, r"\multicolumn{{4}}{{r}}{{continued\ldots}}\\")?;
    writeln!(out, r"\endfoot")?;
    writeln!(out, r"\\\bottomrule")?;
    writeln!(out, r"\endlastfoot")?;
    Ok(())
}

/// Rows for one file, entity name on the first row only, then a divider.
fn write_file_rows<W: Write>(out: &mut W, file: &ParameterFile) -> Result<()> {
    if file.is_empty() {
        return Ok(());
    }

    for (i, decl) in file.declarations.iter().enumerate() {
        let entity = if i == 0 { file.entity_name.as_str() } else { "" };
        writeln!(
            out,
            r"{} & {} & {} & {}\\",
            entity,
            decl.display_name,
            decl.range_display(),
            decl.default_value
        )?;
    }

    writeln!(out, r"\midrule")?;
    Ok(())
}
