//! Source-location helpers.
//!
//! Diagnostics across Luna tag messages with the originating source file.
//! The compiler hands out full paths relative to the workspace root, which
//! drowns log lines in directory noise, so [`file_name!`](crate::file_name!)
//! trims the path to its final component at compile time.

/// Returns the final path component of `path`.
///
/// Both `/` and `\` are treated as separators, so paths reported on either
/// supported platform trim the same way. A path with no separator is
/// returned unchanged. The function is `const`, so the result can feed
/// constants and static diagnostics tables.
///
/// ```
/// use luna_defines::macros::basename;
///
/// assert_eq!(basename("src/platform.rs"), "platform.rs");
/// assert_eq!(basename("C:\\luna\\defines.rs"), "defines.rs");
/// assert_eq!(basename("lib.rs"), "lib.rs");
/// ```
pub const fn basename(path: &str) -> &str {
    let bytes = path.as_bytes();
    let mut i = bytes.len();
    while i > 0 {
        i -= 1;
        if bytes[i] == b'/' || bytes[i] == b'\\' {
            let (_, tail) = bytes.split_at(i + 1);
            // Splitting after an ASCII separator stays on a char boundary.
            return match std::str::from_utf8(tail) {
                Ok(name) => name,
                Err(_) => path,
            };
        }
    }
    path
}

/// Expands to the current source file's name without its directory path.
///
/// Equivalent to [`basename`]`(file!())`, evaluated where the macro is
/// written.
///
/// ```
/// use luna_defines::file_name;
///
/// assert!(file_name!().ends_with(".rs"));
/// assert!(!file_name!().contains('/'));
/// ```
#[macro_export]
macro_rules! file_name {
    () => {
        $crate::macros::basename(::core::file!())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_forward_slash_paths() {
        assert_eq!(basename("src/platform.rs"), "platform.rs");
        assert_eq!(basename("crates/luna-defines/src/lib.rs"), "lib.rs");
    }

    #[test]
    fn trims_backslash_paths() {
        assert_eq!(basename("C:\\luna\\defines.rs"), "defines.rs");
        assert_eq!(basename("include\\luna/defines.rs"), "defines.rs");
    }

    #[test]
    fn bare_names_pass_through() {
        assert_eq!(basename("lib.rs"), "lib.rs");
        assert_eq!(basename(""), "");
    }

    #[test]
    fn usable_in_const_context() {
        const NAME: &str = basename("src/units.rs");
        assert_eq!(NAME, "units.rs");
    }

    #[test]
    fn macro_names_this_file() {
        assert_eq!(file_name!(), "macros.rs");
    }
}
