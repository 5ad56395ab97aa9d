use std::{
    fs::File,
    io::{
        BufReader,
        Read,
    },
    path::Path,
};

use crate::core::{
    VocabularyRecord,
    XieziError,
};

const HEADER_NAMES: [&str; 5] = ["front", "word", "hanzi", "term", "characters"];

/// Reads `front,pronunciation,meaning` rows.
///
/// A header row is skipped when its first cell names the front column.
/// Rows without front text are dropped, missing trailing cells are empty,
/// and lines starting with `#` are comments.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<VocabularyRecord>, XieziError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut records = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let row = match result {
            Ok(row) => row,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                log::warn!("[Deck] Skipping row {}: {}", row_idx + 1, e);
                continue;
            }
        };

        let front = row.get(0).unwrap_or("").trim_start_matches('\u{feff}');
        if row_idx == 0 && is_header(front) {
            continue;
        }
        if front.trim().is_empty() {
            continue;
        }

        records.push(VocabularyRecord::new(
            front,
            row.get(1).unwrap_or(""),
            row.get(2).unwrap_or(""),
        ));
    }

    Ok(records)
}

pub fn load_csv(path: &Path) -> Result<Vec<VocabularyRecord>, XieziError> {
    let file = File::open(path)?;
    let records = parse_csv(BufReader::new(file))?;

    if records.is_empty() {
        return Err(XieziError::EmptyDeck(path.display().to_string()));
    }
    log::info!("[Deck] Loaded {} entries from {}", records.len(), path.display());
    Ok(records)
}

fn is_header(cell: &str) -> bool {
    let lower = cell.to_lowercase();
    HEADER_NAMES.contains(&lower.as_str())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parse_with_header() {
        let data = "word,pinyin,meaning\n你好,nǐ hǎo,hello\n谢谢,xièxie,\"thank you, thanks\"\n";
        let records = parse_csv(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], VocabularyRecord::new("你好", "nǐ hǎo", "hello"));
        assert_eq!(records[1].meaning, "thank you, thanks");
    }

    #[test]
    fn test_parse_without_header() {
        let data = "水,shuǐ,water\n火,huǒ,fire";
        let records = parse_csv(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].front_text, "火");
    }

    #[test]
    fn test_blank_and_short_rows() {
        let data = "\u{feff}Front,Reading,Meaning\n  ,a,b\n山\n# comment,x,y\n\n人 , rén ,person\n";
        let records = parse_csv(data.as_bytes()).unwrap();
        assert_eq!(
            records,
            vec![VocabularyRecord::new("山", "", ""), VocabularyRecord::new("人", "rén", "person")]
        );
    }

    #[test]
    fn test_load_empty_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "front,pronunciation,meaning").unwrap();
        let result = load_csv(file.path());
        assert!(matches!(result, Err(XieziError::EmptyDeck(_))));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "学生,xuésheng,student").unwrap();
        let records = load_csv(file.path()).unwrap();
        assert_eq!(records, vec![VocabularyRecord::new("学生", "xuésheng", "student")]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_csv(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(XieziError::Io(_))));
    }
}
