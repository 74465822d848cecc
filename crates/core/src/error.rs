use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown argument: {}{}", .argument, suggestion_suffix(.suggestion))]
    UnknownArgument {
        argument: String,
        suggestion: Option<String>,
    },

    #[error("Malformed value `{}` for flag {}: {}", .value, .flag, .reason)]
    MalformedValue {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("Flag spelling `{}` is declared more than once", .0)]
    DuplicateFlag(String),

    #[error("Invalid flag name `{}`: names may not be empty, start with `-`, or contain whitespace or `=`", .0)]
    InvalidFlagName(String),

    #[error("No flags were found in the flag table. Is `{}` empty?", .path)]
    EmptyFlagTable { path: String },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(spelling) => format!(" (did you mean `{spelling}`?)"),
        None => String::new(),
    }
}

impl Error {
    pub fn unknown_argument(argument: String, suggestion: Option<String>) -> Self {
        Self::UnknownArgument {
            argument,
            suggestion,
        }
    }

    pub fn malformed_value(flag: String, value: String, reason: String) -> Self {
        Self::MalformedValue {
            flag,
            value,
            reason,
        }
    }

    pub fn empty_flag_table(path: String) -> Self {
        Self::EmptyFlagTable { path }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
