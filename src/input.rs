// Reading input documents from disk.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{MoodError, Result};

/// Read a document as text. PDFs go through `pdf-extract`, everything else
/// is read as UTF-8.
pub fn read_file(path: &Path) -> Result<String> {
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    if ext.eq_ignore_ascii_case("pdf") {
        return pdf_extract::extract_text(path)
            .map_err(|e| MoodError::extraction(format!("PDF extraction failed: {}", e)));
    }

    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_text_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("diary.txt");
        std::fs::write(&path, "Estou muito feliz.")?;

        assert_eq!(read_file(&path)?, "Estou muito feliz.");
        Ok(())
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_file(Path::new("/nonexistent/diary.txt"));
        assert!(matches!(result, Err(MoodError::Io(_))));
    }

    #[test]
    fn test_read_broken_pdf() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, "not really a pdf")?;

        let result = read_file(&path);
        assert!(matches!(result, Err(MoodError::Extraction(_))));
        Ok(())
    }
}
