use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr, parse_macro_input};

/// Derives the `CommandSet` trait for enums.
///
/// Each unit variant becomes one command. The canonical name defaults to the
/// lowercased variant name and can be overridden; aliases resolve to the same
/// variant through `lookup`.
///
/// # Example
///
/// ```ignore
/// use folio_term_macros::CommandSet;
///
/// #[derive(Copy, Clone, PartialEq, Eq, CommandSet)]
/// pub enum Builtin {
///     #[command(about = "List available commands")]
///     Help,
///     #[command(alias = "system-info", about = "Display system information")]
///     Neofetch,
///     #[command(name = "whoami", alias = "about", about = "Who is this?")]
///     WhoAmI,
/// }
/// ```
///
/// This generates:
///
/// ```ignore
/// impl CommandSet for Builtin {
///     const ALL: &'static [Self] = &[Self::Help, Self::Neofetch, Self::WhoAmI];
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Help => "help",
///             Self::Neofetch => "neofetch",
///             Self::WhoAmI => "whoami",
///         }
///     }
///
///     fn lookup(name: &str) -> Option<Self> {
///         match name {
///             "help" => Some(Self::Help),
///             "neofetch" | "system-info" => Some(Self::Neofetch),
///             "whoami" | "about" => Some(Self::WhoAmI),
///             _ => None,
///         }
///     }
///     // aliases() and about() follow the same shape
/// }
/// ```
///
/// # Requirements
///
/// - The type must be an enum
/// - All variants must be unit variants (no fields)
/// - Names and aliases must be unique across the enum
#[proc_macro_derive(CommandSet, attributes(command))]
pub fn derive_command_set(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => err.to_compile_error().into(),
    }
}

struct CommandAttrs {
    name: String,
    aliases: Vec<String>,
    about: String,
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let variants = match &input.data {
        Data::Enum(data_enum) => &data_enum.variants,
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "CommandSet can only be derived for enums",
            ));
        }
    };

    let mut parsed = Vec::with_capacity(variants.len());
    let mut seen: Vec<String> = Vec::new();

    for variant in variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "CommandSet can only be derived for enums with unit variants (no fields)",
            ));
        }

        let attrs = parse_command_attrs(variant)?;

        for word in core::iter::once(&attrs.name).chain(attrs.aliases.iter()) {
            if seen.contains(word) {
                return Err(syn::Error::new_spanned(
                    variant,
                    format!("command name `{}` is used more than once", word),
                ));
            }
            seen.push(word.clone());
        }

        parsed.push((&variant.ident, attrs));
    }

    let all = parsed.iter().map(|(ident, _)| quote! { Self::#ident });

    let name_arms = parsed.iter().map(|(ident, attrs)| {
        let canonical = &attrs.name;
        quote! { Self::#ident => #canonical }
    });

    let alias_arms = parsed.iter().map(|(ident, attrs)| {
        let aliases = &attrs.aliases;
        quote! { Self::#ident => &[#(#aliases),*] }
    });

    let about_arms = parsed.iter().map(|(ident, attrs)| {
        let about = &attrs.about;
        quote! { Self::#ident => #about }
    });

    let lookup_arms = parsed.iter().map(|(ident, attrs)| {
        let canonical = &attrs.name;
        let aliases = &attrs.aliases;
        quote! { #canonical #(| #aliases)* => Some(Self::#ident) }
    });

    Ok(quote! {
        impl ::folio_term::commands::CommandSet for #name {
            const ALL: &'static [Self] = &[#(#all),*];

            fn name(&self) -> &'static str {
                match self {
                    #(#name_arms,)*
                }
            }

            fn aliases(&self) -> &'static [&'static str] {
                match self {
                    #(#alias_arms,)*
                }
            }

            fn about(&self) -> &'static str {
                match self {
                    #(#about_arms,)*
                }
            }

            fn lookup(name: &str) -> Option<Self> {
                match name {
                    #(#lookup_arms,)*
                    _ => None,
                }
            }
        }
    })
}

fn parse_command_attrs(variant: &syn::Variant) -> syn::Result<CommandAttrs> {
    let mut attrs = CommandAttrs {
        name: variant.ident.to_string().to_lowercase(),
        aliases: Vec::new(),
        about: String::new(),
    };

    for attr in variant.attrs.iter().filter(|a| a.path().is_ident("command")) {
        attr.parse_nested_meta(|meta| {
            let value: LitStr = meta.value()?.parse()?;
            if meta.path.is_ident("name") {
                attrs.name = value.value();
            } else if meta.path.is_ident("alias") {
                attrs.aliases.push(value.value());
            } else if meta.path.is_ident("about") {
                attrs.about = value.value();
            } else {
                return Err(meta.error("expected `name`, `alias` or `about`"));
            }
            Ok(())
        })?;
    }

    Ok(attrs)
}
