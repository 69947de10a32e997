/// Build a [`LogicCatalog`](crate::LogicCatalog) from a literal table.
///
/// Mirrors how catalogs are written by hand: one block per business method,
/// one entry per result code, `en` first and mandatory, other languages
/// optional. The grammar itself rules out empty names and codeless methods,
/// so the expansion cannot fail validation.
///
/// ```
/// use blstack_catalog::logic_catalog;
///
/// let catalog = logic_catalog! {
///     createUser {
///         EMAIL_ALREADY_EXISTS: { en: "Email already exists", zh: "电子邮件已存在" },
///         DUPLICATED: { en: "Duplicated" },
///     },
///     login {
///         LOGIN_SUCCESSFULLY: { en: "Login successfully" },
///     },
/// };
///
/// assert!(catalog.contains_method("createUser"));
/// assert_eq!(
///     catalog.record("login", "LOGIN_SUCCESSFULLY").unwrap().default_message(),
///     "Login successfully",
/// );
/// ```
#[macro_export]
macro_rules! logic_catalog {
    (
        $(
            $method:ident {
                $(
                    $code:ident : { en: $en:literal $(, $lang:ident : $msg:literal)* $(,)? }
                ),+ $(,)?
            }
        ),+ $(,)?
    ) => {{
        let builder = $crate::CatalogBuilder::default();
        $($(
            let builder = builder.code(
                stringify!($method),
                stringify!($code),
                $crate::LangRecord::new($en)
                    $(.with($crate::LangTag::new(stringify!($lang)), $msg))*,
            );
        )+)+
        builder
            .build()
            .expect("catalog literal upholds the catalog invariants")
    }};
}
