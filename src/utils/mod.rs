pub mod environment;
pub mod paths;

pub use environment::{GITHUB_TOKEN_VAR, get_github_token};
pub use paths::{
    format_path_with_tilde, has_extension, json_output_path, read_text_file, validate_file_size,
};
