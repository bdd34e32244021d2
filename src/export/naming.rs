//! Output filename helpers.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use chrono::NaiveDateTime;
use regex::Regex;

use super::ExportFormat;

/// Base name used when the paper has no title.
const FALLBACK_BASENAME: &str = "exam_paper";

fn invalid_chars() -> &'static Regex {
    static INVALID: OnceLock<Regex> = OnceLock::new();
    INVALID.get_or_init(|| Regex::new(r#"[<>:"/\\|?*]"#).expect("valid filename regex"))
}

/// Replace characters that are not allowed in file names with `_`.
pub fn sanitize_filename(name: &str) -> String {
    invalid_chars().replace_all(name, "_").into_owned()
}

/// Suggested file name: `<title>_<yyyyMMdd_HHmmss>.<ext>`.
pub fn default_filename(title: &str, format: ExportFormat, timestamp: NaiveDateTime) -> String {
    let title = title.trim();
    let base = if title.is_empty() {
        FALLBACK_BASENAME.to_string()
    } else {
        sanitize_filename(title)
    };

    format!(
        "{}_{}.{}",
        base,
        timestamp.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}

/// Append `.ext` unless the path already ends with it.
pub fn ensure_extension(path: &Path, ext: &str) -> PathBuf {
    let has_ext = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext));

    if has_ext {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_owned();
        name.push(".");
        name.push(ext);
        PathBuf::from(name)
    }
}

/// Make repeated destinations distinct by appending `_2`, `_3`, ... to the
/// file stem. The first occurrence keeps its name.
pub fn unique_paths(paths: impl IntoIterator<Item = PathBuf>) -> Vec<PathBuf> {
    let paths: Vec<PathBuf> = paths.into_iter().collect();
    let mut taken: HashSet<PathBuf> = HashSet::new();
    let mut result = Vec::with_capacity(paths.len());

    for path in paths {
        let mut candidate = path.clone();
        let mut n = 2;
        while taken.contains(&candidate) {
            candidate = numbered(&path, n);
            n += 1;
        }
        taken.insert(candidate.clone());
        result.push(candidate);
    }
    result
}

fn numbered(path: &Path, n: usize) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let name = match path.extension() {
        Some(ext) => format!("{}_{}.{}", stem, n, ext.to_string_lossy()),
        None => format!("{}_{}", stem, n),
    };
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 7)
            .unwrap()
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename(r#"a<b>c:d"e/f\g|h?i*j"#), "a_b_c_d_e_f_g_h_i_j");
        assert_eq!(sanitize_filename("Plain Name"), "Plain Name");
    }

    #[test]
    fn test_default_filename() {
        assert_eq!(
            default_filename("Term 1: Math", ExportFormat::Html, timestamp()),
            "Term 1_ Math_20240309_140507.html"
        );
        assert_eq!(
            default_filename("  ", ExportFormat::Word, timestamp()),
            "exam_paper_20240309_140507.doc"
        );
    }

    #[test]
    fn test_ensure_extension() {
        assert_eq!(
            ensure_extension(Path::new("out/paper"), "html"),
            PathBuf::from("out/paper.html")
        );
        assert_eq!(
            ensure_extension(Path::new("out/paper.HTML"), "html"),
            PathBuf::from("out/paper.HTML")
        );
        assert_eq!(
            ensure_extension(Path::new("paper.v2"), "doc"),
            PathBuf::from("paper.v2.doc")
        );
    }

    #[test]
    fn test_unique_paths() {
        let paths = unique_paths([
            PathBuf::from("out/paper.html"),
            PathBuf::from("out/paper.html"),
            PathBuf::from("out/other.html"),
            PathBuf::from("out/paper.html"),
            PathBuf::from("out/paper_2.html"),
        ]);
        assert_eq!(
            paths,
            vec![
                PathBuf::from("out/paper.html"),
                PathBuf::from("out/paper_2.html"),
                PathBuf::from("out/other.html"),
                PathBuf::from("out/paper_3.html"),
                PathBuf::from("out/paper_2_2.html"),
            ]
        );
    }
}
