//! CLI argument parsing

use crate::DEFAULT_BATCH_SIZE;

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub image: String,
    pub output: Option<String>,
    pub format: String,
    pub delimiter: String,
    pub batch_size: usize,
    pub area: Option<String>,
    pub cluster: Option<String>,
    pub namespace: Option<String>,
    pub quiet: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            image: String::new(),
            output: None,
            format: "delimited".to_string(),
            delimiter: "\t".to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            area: None,
            cluster: None,
            namespace: None,
            quiet: false,
        }
    }
}

/// Parse command line arguments
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut parsed = CliArgs::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--output" | "-o" => {
                i += 1;
                if i >= args.len() {
                    return Err("--output requires a file path".to_string());
                }
                parsed.output = Some(args[i].clone());
            }
            "--format" => {
                i += 1;
                if i >= args.len() {
                    return Err("--format requires a value".to_string());
                }
                parsed.format.clone_from(&args[i]);
            }
            "--delimiter" => {
                i += 1;
                if i >= args.len() {
                    return Err("--delimiter requires a value".to_string());
                }
                parsed.delimiter.clone_from(&args[i]);
            }
            "--batch-size" => {
                i += 1;
                if i >= args.len() {
                    return Err("--batch-size requires a value".to_string());
                }
                let size: usize = args[i]
                    .parse()
                    .map_err(|_| "--batch-size must be a positive integer".to_string())?;
                if size == 0 {
                    return Err("--batch-size must be greater than zero".to_string());
                }
                parsed.batch_size = size;
            }
            "--area" => {
                i += 1;
                if i >= args.len() {
                    return Err("--area requires a value".to_string());
                }
                parsed.area = Some(args[i].clone());
            }
            "--cluster" => {
                i += 1;
                if i >= args.len() {
                    return Err("--cluster requires a value".to_string());
                }
                parsed.cluster = Some(args[i].clone());
            }
            "--namespace" => {
                i += 1;
                if i >= args.len() {
                    return Err("--namespace requires a value".to_string());
                }
                parsed.namespace = Some(args[i].clone());
            }
            "--quiet" => {
                parsed.quiet = true;
            }
            arg if !arg.starts_with("--") => {
                if parsed.image.is_empty() {
                    parsed.image = arg.to_string();
                } else {
                    return Err(format!("Unexpected argument: {arg}"));
                }
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    if parsed.image.is_empty() {
        return Err("Missing required argument: IMAGE".to_string());
    }

    Ok(parsed)
}
