pub(crate) mod kms;
pub(crate) mod policy;
pub(crate) mod protection_jobs;
#[cfg(test)]
mod tests;

// Every model prints as its JSON serialization.
macro_rules! json_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ::std::fmt::Display for $ty {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    let json =
                        ::serde_json::to_string_pretty(self).map_err(|_| ::std::fmt::Error)?;
                    f.write_str(&json)
                }
            }
        )*
    };
}
pub(crate) use json_display;
