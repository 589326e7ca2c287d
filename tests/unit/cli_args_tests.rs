//! Unit tests for CLI argument parsing

#[cfg(test)]
mod tests {
    use fsdump::DEFAULT_BATCH_SIZE;
    use fsdump::cli::args::parse_args;

    fn make_args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_image_with_defaults() {
        let argv = make_args(&["fsdump", "image.jsonl"]);

        let parsed = parse_args(&argv).expect("parse args");

        assert_eq!(parsed.image, "image.jsonl");
        assert_eq!(parsed.format, "delimited");
        assert_eq!(parsed.delimiter, "\t");
        assert_eq!(parsed.batch_size, DEFAULT_BATCH_SIZE);
        assert!(parsed.output.is_none());
        assert!(!parsed.quiet);
    }

    #[test]
    fn parse_format_and_output_flags() {
        let argv = make_args(&[
            "fsdump",
            "image.jsonl",
            "--format",
            "json",
            "--output",
            "records.jsonl",
        ]);

        let parsed = parse_args(&argv).expect("parse args");

        assert_eq!(parsed.format, "json");
        assert_eq!(parsed.output.as_deref(), Some("records.jsonl"));
    }

    #[test]
    fn parse_delimiter_and_batch_size() {
        let argv = make_args(&[
            "fsdump",
            "image.jsonl",
            "--delimiter",
            ",",
            "--batch-size",
            "64",
        ]);

        let parsed = parse_args(&argv).expect("parse args");

        assert_eq!(parsed.delimiter, ",");
        assert_eq!(parsed.batch_size, 64);
    }

    #[test]
    fn parse_provenance_tags_and_quiet() {
        let argv = make_args(&[
            "fsdump",
            "image.jsonl",
            "--area",
            "eu-west",
            "--cluster",
            "prod-hdfs",
            "--namespace",
            "warehouse",
            "--quiet",
        ]);

        let parsed = parse_args(&argv).expect("parse args");

        assert_eq!(parsed.area.as_deref(), Some("eu-west"));
        assert_eq!(parsed.cluster.as_deref(), Some("prod-hdfs"));
        assert_eq!(parsed.namespace.as_deref(), Some("warehouse"));
        assert!(parsed.quiet);
    }

    #[test]
    fn batch_size_requires_positive_value() {
        let argv = make_args(&["fsdump", "image.jsonl", "--batch-size", "0"]);
        let err = parse_args(&argv).expect_err("zero batch size should be rejected");
        assert!(err.contains("greater than zero"));

        let argv = make_args(&["fsdump", "image.jsonl", "--batch-size", "many"]);
        let err = parse_args(&argv).expect_err("non-numeric batch size should be rejected");
        assert!(err.contains("positive integer"));
    }

    #[test]
    fn flags_require_values() {
        let argv = make_args(&["fsdump", "image.jsonl", "--delimiter"]);
        let err = parse_args(&argv).expect_err("delimiter flag without value should fail");
        assert!(err.contains("--delimiter requires a value"));

        let argv = make_args(&["fsdump", "image.jsonl", "--format"]);
        let err = parse_args(&argv).expect_err("format flag without value should fail");
        assert!(err.contains("--format requires a value"));
    }

    #[test]
    fn image_argument_is_required() {
        let argv = make_args(&["fsdump", "--quiet"]);
        let err = parse_args(&argv).expect_err("missing image should fail");
        assert!(err.contains("Missing required argument: IMAGE"));
    }

    #[test]
    fn unknown_option_rejected() {
        let argv = make_args(&["fsdump", "image.jsonl", "--frobnicate"]);
        let err = parse_args(&argv).expect_err("unknown option should fail");
        assert!(err.contains("Unknown option"));
    }

    #[test]
    fn second_positional_rejected() {
        let argv = make_args(&["fsdump", "image.jsonl", "other.jsonl"]);
        let err = parse_args(&argv).expect_err("second positional should fail");
        assert!(err.contains("Unexpected argument"));
    }
}
