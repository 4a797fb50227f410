#[doc(hidden)]
#[cfg(test)]
macro_rules! assert_ok {
    ($val:expr) => ({
        match $val {
            Ok( res ) => res,
            Err( err ) => panic!( "expected Ok(..) got Err({})", err)
        }
    });
    ($val:expr, $ctx:expr) => ({
        match $val {
            Ok( res ) => res,
            Err( err ) => panic!( "expected Ok(..) got Err({}) [ctx: {:?}]", err, $ctx)
        }
    });
}

#[doc(hidden)]
#[cfg(test)]
macro_rules! assert_err {
    ($val:expr) => ({
        match $val {
            Ok( val ) => panic!( "expected Err(..) got Ok({:?})", val),
            Err( err ) => err,
        }
    });
    ($val:expr, $ctx:expr) => ({
        match $val {
            Ok( val ) => panic!( "expected Err(..) got Ok({:?}) [ctx: {:?}]", val, $ctx),
            Err( err ) => err,
        }
    });
}

/// builds the `(extension, type, subtype)` rows of the extension table
///
/// # Example
///
/// ```ignore
/// static ROWS: &[(&str, &str, &str)] = extension_rows! {
///     "application" => {
///         "json" => "json",
///         "js" => "javascript",
///     }
///     "text" => {
///         "txt" => "plain",
///     }
/// };
/// ```
macro_rules! extension_rows {
    ($($type_:literal => { $($ext:literal => $subtype:literal),* $(,)? })*) => {
        &[ $( $( ($ext, $type_, $subtype), )* )* ]
    }
}
