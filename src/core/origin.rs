//! Call-site capture

use std::fmt;

/// Source location of a log call.
///
/// Normally built by the [`origin!`](crate::origin) macro, which fills every
/// field from the call site at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    pub file: &'static str,
    pub line: u32,
    pub function: &'static str,
}

impl Origin {
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// Shortened file path used in rendered records.
    ///
    /// See [`short_file`].
    pub fn short_file(&self) -> &'static str {
        short_file(self.file)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} in function '{}'", self.short_file(), self.line, self.function)
    }
}

/// Resolve the displayed portion of a source path.
///
/// Returns the remainder after the last `src/` segment when one exists,
/// otherwise the final path component, otherwise the whole path. Both `/`
/// and `\` count as separators.
pub fn short_file(path: &str) -> &str {
    let bytes = path.as_bytes();
    let mut after_src = None;
    let mut search_from = 0;
    while let Some(pos) = path[search_from..].find("src") {
        let start = search_from + pos;
        let end = start + 3;
        let at_segment_start = start == 0 || matches!(bytes[start - 1], b'/' | b'\\');
        let followed_by_sep = matches!(bytes.get(end), Some(b'/') | Some(b'\\'));
        if at_segment_start && followed_by_sep {
            after_src = Some(end + 1);
        }
        search_from = end;
    }

    if let Some(idx) = after_src {
        if idx < path.len() {
            return &path[idx..];
        }
    }

    match path.rfind(|c: char| c == '/' || c == '\\') {
        Some(idx) if idx + 1 < path.len() => &path[idx + 1..],
        _ => path,
    }
}

/// Strip the helper item and closure suffixes from a `type_name` path.
///
/// Used by [`function_name!`](crate::function_name); not meant to be called
/// directly.
#[doc(hidden)]
pub fn trim_function_path(raw: &'static str) -> &'static str {
    let mut name = raw.strip_suffix("::__game_logger_here").unwrap_or(raw);
    while let Some(stripped) = name.strip_suffix("::{{closure}}") {
        name = stripped;
    }
    name
}

/// Expands to the path of the enclosing function as a `&'static str`.
///
/// ```
/// fn load_level() -> &'static str {
///     game_logger::function_name!()
/// }
/// assert!(load_level().ends_with("load_level"));
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __game_logger_here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::core::origin::trim_function_path(__type_name_of(__game_logger_here))
    }};
}

/// Expands to an [`Origin`] describing the call site.
#[macro_export]
macro_rules! origin {
    () => {
        $crate::Origin::new(file!(), line!(), $crate::function_name!())
    };
}
