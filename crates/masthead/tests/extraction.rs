//! Edge case tests for Mermaid block extraction
//!
//! Tests for boundary conditions, unusual documents, and fence handling.

// =============================================================================
// Basic Extraction
// =============================================================================

mod basic_extraction {
    use masthead::extract;

    #[test]
    fn test_single_block_exact_content() {
        let doc = "```mermaid\ngraph TD; A-->B;\n```\n";
        let blocks = extract(doc);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].index, 0);
        assert_eq!(blocks[0].content, "graph TD; A-->B;");
    }

    #[test]
    fn test_blocks_are_indexed_in_document_order() {
        let doc = "\
# Architecture

```mermaid
graph TD; A-->B;
```

Some prose between diagrams.

```mermaid
sequenceDiagram
    Alice->>Bob: Hello
```

```mermaid
graph LR; C-->D;
```
";
        let blocks = extract(doc);
        assert_eq!(blocks.len(), 3);
        for (i, block) in blocks.iter().enumerate() {
            assert_eq!(block.index, i);
        }
        assert_eq!(blocks[0].content, "graph TD; A-->B;");
        assert!(blocks[1].content.starts_with("sequenceDiagram"));
        assert_eq!(blocks[2].content, "graph LR; C-->D;");
    }

    #[test]
    fn test_inner_newlines_preserved() {
        let doc = "```mermaid\ngraph TD\n    A --> B\n    B --> C\n```\n";
        let blocks = extract(doc);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "graph TD\n    A --> B\n    B --> C");
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let doc = "```mermaid\ngraph TD; A-->B;\n```\n\n```mermaid\ngraph LR; C-->D;\n```\n";
        let first = extract(doc);
        let second = extract(doc);
        assert_eq!(first, second);
    }
}

// =============================================================================
// Empty and Diagram-Free Documents
// =============================================================================

mod empty_inputs {
    use masthead::extract;

    #[test]
    fn test_empty_document() {
        assert!(extract("").is_empty());
    }

    #[test]
    fn test_whitespace_only_document() {
        assert!(extract("   \n\n  \t  \n").is_empty());
    }

    #[test]
    fn test_prose_without_fences() {
        assert!(extract("# Title\n\nJust some markdown prose.\n").is_empty());
    }

    #[test]
    fn test_other_language_fences_ignored() {
        let doc = "```python\nprint('hi')\n```\n\n```rust\nfn main() {}\n```\n";
        assert!(extract(doc).is_empty());
    }
}

// =============================================================================
// Tag Case Handling
// =============================================================================

mod tag_case {
    use masthead::extract;

    #[test]
    fn test_capitalized_tag() {
        let doc = "```Mermaid\ngraph TD; A-->B;\n```\n";
        assert_eq!(extract(doc).len(), 1);
    }

    #[test]
    fn test_uppercase_tag() {
        let doc = "```MERMAID\ngraph TD; A-->B;\n```\n";
        assert_eq!(extract(doc).len(), 1);
    }

    #[test]
    fn test_mixed_case_tag() {
        let doc = "```mErMaId\ngraph TD; A-->B;\n```\n";
        assert_eq!(extract(doc).len(), 1);
    }

    #[test]
    fn test_tag_with_suffix_ignored() {
        let doc = "```mermaidjs\ngraph TD; A-->B;\n```\n";
        assert!(extract(doc).is_empty());
    }
}

// =============================================================================
// Whitespace and Line Endings
// =============================================================================

mod whitespace_handling {
    use masthead::extract;

    #[test]
    fn test_content_is_trimmed() {
        let doc = "```mermaid\n\n  graph TD; A-->B;  \n\n```\n";
        let blocks = extract(doc);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "graph TD; A-->B;");
    }

    #[test]
    fn test_trailing_blanks_after_tag() {
        let doc = "```mermaid   \ngraph TD; A-->B;\n```\n";
        let blocks = extract(doc);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "graph TD; A-->B;");
    }

    #[test]
    fn test_crlf_line_endings() {
        let doc = "```mermaid\r\ngraph TD; A-->B;\r\n```\r\n";
        let blocks = extract(doc);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "graph TD; A-->B;");
    }

    #[test]
    fn test_blank_content_becomes_empty_string() {
        let doc = "```mermaid\n   \n```\n";
        let blocks = extract(doc);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "");
    }

    #[test]
    fn test_closing_fence_at_end_of_input_without_newline() {
        let doc = "```mermaid\ngraph TD; A-->B;\n```";
        let blocks = extract(doc);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "graph TD; A-->B;");
    }
}

// =============================================================================
// Malformed Fences
// =============================================================================

mod malformed_fences {
    use masthead::convert::unterminated_fences;
    use masthead::extract;

    #[test]
    fn test_unterminated_fence_yields_no_block() {
        let doc = "```mermaid\ngraph TD; A-->B;\n";
        assert!(extract(doc).is_empty());
    }

    #[test]
    fn test_unterminated_fence_does_not_break_earlier_blocks() {
        let doc = "```mermaid\ngraph TD; A-->B;\n```\n\n```mermaid\ndangling\n";
        let blocks = extract(doc);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "graph TD; A-->B;");
    }

    #[test]
    fn test_unterminated_fences_reported_with_line_numbers() {
        let doc = "# Title\n\n```mermaid\ngraph TD; A-->B;\n```\n\n```mermaid\ndangling\n";
        assert_eq!(unterminated_fences(doc), vec![7]);
    }

    #[test]
    fn test_wellformed_document_reports_nothing() {
        let doc = "```mermaid\ngraph TD; A-->B;\n```\n";
        assert!(unterminated_fences(doc).is_empty());
    }

    #[test]
    fn test_indented_fence_not_recognized() {
        let doc = "    ```mermaid\n    graph TD; A-->B;\n    ```\n";
        assert!(extract(doc).is_empty());
    }

    #[test]
    fn test_midline_backticks_are_not_fences() {
        let doc = "see ```mermaid\ngraph TD; A-->B;\n``` for details\n";
        assert!(extract(doc).is_empty());
    }
}

// =============================================================================
// Lazy Iteration
// =============================================================================

mod lazy_iteration {
    use masthead::convert::extract_blocks;

    #[test]
    fn test_iterator_can_be_consumed_partially() {
        let doc = "```mermaid\none\n```\n\n```mermaid\ntwo\n```\n\n```mermaid\nthree\n```\n";
        let first: Vec<_> = extract_blocks(doc).take(1).collect();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].content, "one");
    }

    #[test]
    fn test_iterator_is_finite() {
        let doc = "```mermaid\nonly\n```\n";
        assert_eq!(extract_blocks(doc).count(), 1);
    }
}

// =============================================================================
// Properties
// =============================================================================

mod properties {
    use masthead::extract;
    use proptest::prelude::*;

    proptest! {
        // Any document assembled from N well-formed blocks and arbitrary
        // prose yields exactly N blocks, indexed 0..N-1, trimmed.
        #[test]
        fn extracts_every_wellformed_block(
            contents in prop::collection::vec("[A-Za-z0-9;> -]{1,40}", 0..8)
        ) {
            let mut doc = String::from("# Heading\n\nSome prose.\n");
            for content in &contents {
                doc.push_str("\n```mermaid\n");
                doc.push_str(content);
                doc.push_str("\n```\n\nMore prose.\n");
            }

            let blocks = extract(&doc);
            prop_assert_eq!(blocks.len(), contents.len());
            for (i, block) in blocks.iter().enumerate() {
                prop_assert_eq!(block.index, i);
                prop_assert_eq!(block.content.as_str(), contents[i].trim());
            }
        }
    }
}
