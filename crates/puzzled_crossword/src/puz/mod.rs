//! Across Lite `.puz` binary codec.
//!
//! Encoding is bit-exact for round-trip and always produces valid checksums.
//! Decoding never verifies them, since plenty of real-world `.puz` files in
//! the wild carry stale sums from editors that forgot to recompute them, and
//! this codec accepts those the same way the reference implementation does.
//! Extras sections (`GRBS`/`RTBL`/`LTIM`/`GEXT`) are not read or written;
//! this codec only ever produces and consumes the base format.

mod checksums;
pub mod error;
mod grids;
mod header;
mod strings;

use checksums::{Checksums, PartBuilder};
use header::Header;

use crate::{ClueMap, CrosswordGrid, WordIndex};

pub const TITLE_CAP: usize = 50;
pub const AUTHOR_CAP: usize = 50;
pub const COPYRIGHT_CAP: usize = 200;
pub const NOTES_CAP: usize = 2000;

/// Everything a `.puz` file carries beyond the grid shape itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzFile {
    pub grid: CrosswordGrid,
    pub clues: ClueMap,
    pub title: String,
    pub author: String,
    pub copyright: String,
    pub notes: String,
}

/// Encodes `puz` to bytes.
///
/// If `truncate` is `true`, fields longer than their format cap are cut down
/// to fit; if `false`, an over-length field fails with
/// [`error::write::Error::EncodeCapExceeded`] instead.
pub fn encode(puz: &PuzFile, truncate: bool) -> error::write::Result<Vec<u8>> {
    let title = capped(&puz.title, "title", TITLE_CAP, truncate)?;
    let author = capped(&puz.author, "author", AUTHOR_CAP, truncate)?;
    let copyright = capped(&puz.copyright, "copyright", COPYRIGHT_CAP, truncate)?;
    let notes = capped(&puz.notes, "notes", NOTES_CAP, truncate)?;

    let index = WordIndex::build(&puz.grid);
    let entries = index.in_clue_order();
    let clue_texts: Vec<String> = entries.iter().map(|e| puz.clues.get(e.id()).unwrap_or("").to_string()).collect();

    let solution_bytes = grids::encode_grid(&puz.grid);
    // This core has no standalone player-state; the state grid mirrors the
    // solution on encode (see `grids` module doc).
    let state_bytes = solution_bytes.clone();

    let title_bytes = strings::encode_cp1252(&title);
    let author_bytes = strings::encode_cp1252(&author);
    let copyright_bytes = strings::encode_cp1252(&copyright);
    let notes_bytes = strings::encode_cp1252(&notes);
    let clue_bytes: Vec<Vec<u8>> = clue_texts.iter().map(|c| strings::encode_cp1252(c)).collect();

    let mut part = PartBuilder::new();
    part.push_terminated(&title_bytes);
    part.push_terminated(&author_bytes);
    part.push_terminated(&copyright_bytes);
    for clue in &clue_bytes {
        part.push_clue(clue);
    }
    part.push_terminated(&notes_bytes);
    let part_bytes = part.into_bytes();

    let mut header = Header {
        file_checksum: 0,
        cib_checksum: 0,
        masked_low: [0; 4],
        masked_high: [0; 4],
        scrambled_checksum: 0,
        width: puz.grid.cols() as u8,
        height: puz.grid.rows() as u8,
        num_clues: entries.len() as u16,
        scrambled_tag: 0,
    };

    let cib = checksums::cksum_region(0, &header.cib_bytes());
    let sol = checksums::cksum_region(0, &solution_bytes);
    let grid_cksum = checksums::cksum_region(0, &state_bytes);
    let part_cksum = checksums::cksum_region(0, &part_bytes);
    let checksums = Checksums { cib, sol, grid: grid_cksum, part: part_cksum };

    header.cib_checksum = cib;
    header.file_checksum = checksums.overall(&solution_bytes, &state_bytes, &part_bytes);
    let (low, high) = checksums.masked();
    header.masked_low = low;
    header.masked_high = high;

    let mut out = Vec::with_capacity(header::HEADER_LEN + solution_bytes.len() + state_bytes.len() + part_bytes.len());
    header.write(&mut out);
    out.extend_from_slice(&solution_bytes);
    out.extend_from_slice(&state_bytes);
    write_terminated(&mut out, &title_bytes);
    write_terminated(&mut out, &author_bytes);
    write_terminated(&mut out, &copyright_bytes);
    for clue in &clue_bytes {
        write_terminated(&mut out, clue);
    }
    write_terminated(&mut out, &notes_bytes);

    Ok(out)
}

/// Decodes `bytes` into a [`PuzFile`]. Checksums are not verified.
pub fn decode(bytes: &[u8]) -> error::read::Result<PuzFile> {
    let header = Header::parse(bytes)?;
    let rows = header.height as usize;
    let cols = header.width as usize;

    let mut cursor = header::HEADER_LEN;
    let solution = grids::decode_grid(&bytes[cursor..], rows, cols)?;
    cursor += rows * cols;
    // Player state is decoded to validate its bytes are present, then
    // discarded: this core has no type to hold it separately from the
    // solution.
    let _state = grids::decode_grid(&bytes[cursor..], rows, cols)?;
    cursor += rows * cols;

    let title = strings::read_cstring(bytes, &mut cursor, "title")?;
    let author = strings::read_cstring(bytes, &mut cursor, "author")?;
    let copyright = strings::read_cstring(bytes, &mut cursor, "copyright")?;

    let mut clue_texts = Vec::with_capacity(header.num_clues as usize);
    for _ in 0..header.num_clues {
        clue_texts.push(strings::read_cstring(bytes, &mut cursor, "clue")?);
    }

    let notes = strings::read_cstring(bytes, &mut cursor, "notes")?;

    let index = WordIndex::build(&solution);
    let entries = index.in_clue_order();
    let mut clues = ClueMap::new();
    for (entry, clue) in entries.iter().zip(clue_texts.iter()) {
        if !clue.is_empty() {
            clues.set(entry.id(), clue.clone());
        }
    }

    Ok(PuzFile { grid: solution, clues, title, author, copyright, notes })
}

fn capped(value: &str, field: &'static str, cap: usize, truncate: bool) -> error::write::Result<String> {
    if value.len() <= cap {
        return Ok(value.to_string());
    }
    if truncate {
        Ok(strings::truncate_to_cap(value, cap))
    } else {
        Err(error::write::Error::EncodeCapExceeded { field, len: value.len(), cap })
    }
}

fn write_terminated(out: &mut Vec<u8>, bytes: &[u8]) {
    out.extend_from_slice(bytes);
    out.push(0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Symmetry};

    fn sample_grid() -> CrosswordGrid {
        let mut grid = CrosswordGrid::new(3, 3).unwrap();
        grid.set_cell(1, 1, Cell::Black, Symmetry::None).unwrap();
        for (row, col, ch) in [(0, 0, 'C'), (0, 1, 'A'), (0, 2, 'T'), (1, 0, 'A'), (2, 0, 'T')] {
            grid.set_cell(row, col, Cell::Letter(ch), Symmetry::None).unwrap();
        }
        grid
    }

    #[test]
    fn round_trips_grid_title_clues_and_notes() {
        let grid = sample_grid();
        let index = WordIndex::build(&grid);
        let mut clues = ClueMap::new();
        for entry in index.in_clue_order() {
            clues.set(entry.id(), format!("Clue for {}", entry.number));
        }

        let puz = PuzFile {
            grid,
            clues,
            title: "Test".to_string(),
            author: "A. Uthor".to_string(),
            copyright: "(c) 2026".to_string(),
            notes: "Some notes".to_string(),
        };

        let bytes = encode(&puz, false).unwrap();
        let decoded = decode(&bytes).unwrap();

        assert_eq!(decoded, puz);
    }

    #[test]
    fn overall_checksum_matches_recomputation() {
        let puz = PuzFile {
            grid: sample_grid(),
            clues: ClueMap::new(),
            title: String::new(),
            author: String::new(),
            copyright: String::new(),
            notes: String::new(),
        };

        let bytes = encode(&puz, false).unwrap();
        let stored = u16::from_le_bytes([bytes[0], bytes[1]]);

        let header = Header::parse(&bytes).unwrap();
        assert_eq!(header.file_checksum, stored);
    }

    #[test]
    fn rejects_bad_magic() {
        let mut bytes = vec![0u8; header::HEADER_LEN];
        bytes[0x02..0x0E].copy_from_slice(b"NOTAPUZZLE!!");
        assert_eq!(decode(&bytes), Err(error::read::Error::InvalidMagic));
    }

    #[test]
    fn truncates_over_cap_fields_when_allowed() {
        let puz = PuzFile {
            grid: CrosswordGrid::new(1, 1).unwrap(),
            clues: ClueMap::new(),
            title: "x".repeat(TITLE_CAP + 10),
            author: String::new(),
            copyright: String::new(),
            notes: String::new(),
        };

        let bytes = encode(&puz, true).unwrap();
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded.title.len(), TITLE_CAP);
    }

    #[test]
    fn rejects_over_cap_fields_without_truncation() {
        let puz = PuzFile {
            grid: CrosswordGrid::new(1, 1).unwrap(),
            clues: ClueMap::new(),
            title: "x".repeat(TITLE_CAP + 10),
            author: String::new(),
            copyright: String::new(),
            notes: String::new(),
        };

        let result = encode(&puz, false);
        assert!(matches!(result, Err(error::write::Error::EncodeCapExceeded { field: "title", .. })));
    }
}
