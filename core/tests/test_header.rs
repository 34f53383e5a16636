// Header records: the file header `[6]` and the per-selection header
// `[empty_flag, num_categories]`.

#[cfg(test)]
mod tests {
    use gvselect_core::{
        constants::{selection_flags, NUM_PTYPES, NUM_SELECTIONS},
        framing::{Endian, RecordWriter},
        headers::{
            decode_file_header, decode_selection_header, encode_file_header,
            encode_selection_header, FileHeader, HeaderError, SelectionHeader,
        },
        Selection,
    };

    fn le_ints(bytes: &[u8]) -> Vec<i32> {
        bytes
            .chunks_exact(4)
            .map(|c| i32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect()
    }

// ## 1. Defaults and flags

    #[test]
    fn file_header_default_counts_selections() {
        assert_eq!(FileHeader::default().num_selections, NUM_SELECTIONS as i32);
    }

    #[test]
    fn selection_header_flags_empty_selection() {
        let s = Selection::new("empty").unwrap();
        let h = SelectionHeader::for_selection(&s);
        assert_eq!(h.empty_flag, selection_flags::ALL_EMPTY);
        assert_eq!(h.num_categories, NUM_PTYPES as i32);
        assert!(h.is_all_empty());
    }

    #[test]
    fn selection_header_flags_selection_with_ids() {
        let mut s = Selection::new("full").unwrap();
        s.set_ids(5, vec![1]).unwrap();
        let h = SelectionHeader::for_selection(&s);
        assert_eq!(h.empty_flag, selection_flags::HAS_IDS);
        assert!(!h.is_all_empty());
    }

// ## 2. Encoding

    #[test]
    fn file_header_wire_layout() {
        let mut w = RecordWriter::new(Vec::new(), Endian::Little);
        encode_file_header(&mut w, &FileHeader::default()).unwrap();
        assert_eq!(le_ints(&w.into_inner()), vec![4, 6, 4]);
    }

    #[test]
    fn selection_header_wire_layout() {
        let mut w = RecordWriter::new(Vec::new(), Endian::Little);
        let h = SelectionHeader { empty_flag: 1, num_categories: 6 };
        encode_selection_header(&mut w, &h).unwrap();
        assert_eq!(le_ints(&w.into_inner()), vec![8, 1, 6, 8]);
    }

// ## 3. Decoding

    #[test]
    fn decode_headers_from_payloads() {
        let fh = decode_file_header(&6i32.to_be_bytes(), Endian::Big).unwrap();
        assert_eq!(fh, FileHeader { num_selections: 6 });

        let payload: Vec<u8> = [0i32, 6].iter().flat_map(|v| v.to_le_bytes()).collect();
        let sh = decode_selection_header(&payload, Endian::Little).unwrap();
        assert_eq!(sh, SelectionHeader { empty_flag: 0, num_categories: 6 });
    }

    #[test]
    fn decode_rejects_wrong_size() {
        let err = decode_selection_header(&[0u8; 4], Endian::Little).unwrap_err();
        assert!(matches!(
            err,
            HeaderError::WrongSize { header: "selection", have: 4, need: 8 }
        ));
    }

    #[test]
    fn decode_rejects_unaligned_payload() {
        let err = decode_file_header(&[0u8; 3], Endian::Little).unwrap_err();
        assert!(matches!(err, HeaderError::Unaligned { header: "file", len: 3 }));
    }

    #[test]
    fn header_error_messages_are_stable() {
        let err = FileHeader::from_ints(&[]).unwrap_err();
        assert_eq!(err.to_string(), "file header payload is 0 bytes, expected 4");
    }
}
