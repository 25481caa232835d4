//! Tests for RenderOutput.

#[cfg(test)]
mod tests {
    use crate::core::RenderOutput;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_new() {
        let output = RenderOutput::new("<p>hi</p>");
        assert_eq!(output.html(), "<p>hi</p>");
        assert!(!output.is_empty());
        assert!(output.metadata.is_empty());
    }

    #[test]
    fn test_output_empty() {
        let output = RenderOutput::empty();
        assert!(output.is_empty());
        assert_eq!(output.to_string(), "");
    }

    #[test]
    fn test_output_concat_preserves_order() {
        let output = RenderOutput::concat(vec![
            RenderOutput::new("<a>"),
            RenderOutput::new("text"),
            RenderOutput::new("</a>"),
        ]);
        assert_eq!(output.html(), "<a>text</a>");
    }

    #[test]
    fn test_output_concat_merges_metadata() {
        let output = RenderOutput::concat(vec![
            RenderOutput::new("a").add_metadata("k", serde_json::json!(1)),
            RenderOutput::new("b").add_metadata("k", serde_json::json!(2)),
        ]);
        assert_eq!(output.metadata.get("k"), Some(&serde_json::json!(2)));
    }

    #[test]
    fn test_output_wrap() {
        let output = RenderOutput::new("body").wrap("<main>", "</main>");
        assert_eq!(output.into_html(), "<main>body</main>");
    }

    #[test]
    fn test_output_from_str() {
        let output: RenderOutput = "x".into();
        assert_eq!(output, RenderOutput::new("x"));
    }

    #[test]
    fn test_output_serialize_skips_empty_metadata() {
        let json = serde_json::to_value(RenderOutput::new("x")).unwrap();
        assert_eq!(json, serde_json::json!({"html": "x"}));
    }
}
