// Copyright (c) 2025-2026 The hush developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Procedural macros for the `hush_zero` crate.
//!
//! Provides `#[derive(HushZero)]`, which turns a struct into a record the
//! clearing engine can walk.
//!
//! ## License
//!
//! GPL-3.0-only

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

use proc_macro::TokenStream;
use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Fields, Ident, Index, LitStr, Type, parse_macro_input};

/// Derives `FastZeroizable`, `ZeroizeMetadata`, `ZeroizationProbe` and, when a
/// sentinel is present, `AssertZeroizeOnDrop`.
///
/// Fields are cleared in declaration order.
///
/// # Attributes
///
/// Struct level:
/// - `#[fast_zeroize(drop)]`: also generate a `Drop` that clears the value.
/// - `#[fast_zeroize(self_zeroize)]`: call `SelfZeroize::self_zeroize` before
///   the visible fields, and require `SelfZeroize::is_self_zeroized` in the
///   generated `is_zeroized`. Required when any field is `opaque`.
///
/// Field level:
/// - `#[fast_zeroize(skip)]`: leave the field untouched. Required for `&T`
///   fields, which cannot be cleared.
/// - `#[fast_zeroize(opaque)]`: the engine must not walk this field; the
///   struct's `SelfZeroize` implementation is responsible for it.
///
/// # Sentinel
///
/// A named field `__sentinel: ZeroizeOnDropSentinel` (or, in tuple structs, a
/// field of that type) enables `AssertZeroizeOnDrop`.
///
/// # Rejected shapes
///
/// Enums, unions, non-skipped `&T` fields, and `opaque` fields without
/// `self_zeroize` fail to compile.
///
/// # Example
///
/// ```rust
/// use hush_zero_core::{FastZeroizable, ZeroizationProbe, ZeroizeOnDropSentinel};
/// use hush_zero_derive::HushZero;
///
/// #[derive(HushZero)]
/// #[fast_zeroize(drop)]
/// struct Credentials {
///     user: String,
///     password: Vec<u8>,
///     #[fast_zeroize(skip)]
///     realm: &'static str,
///     __sentinel: ZeroizeOnDropSentinel,
/// }
///
/// let mut creds = Credentials {
///     user: "admin".into(),
///     password: b"hunter2".to_vec(),
///     realm: "prod",
///     __sentinel: ZeroizeOnDropSentinel::default(),
/// };
///
/// creds.fast_zeroize();
/// assert!(creds.is_zeroized());
/// assert_eq!(creds.realm, "prod");
/// ```
#[proc_macro_derive(HushZero, attributes(fast_zeroize))]
pub fn derive_hush_zero(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input).unwrap_or_else(|e| e).into()
}

/// Resolves the path under which the engine is visible to the deriving crate.
///
/// Candidates are Cargo package names, optionally followed by a module path
/// (`hush::zero`). The first one found in the caller's manifest wins.
pub(crate) fn find_root_with_candidates(candidates: &[&'static str]) -> TokenStream2 {
    for &candidate in candidates {
        let (package, module_path) = match candidate.split_once("::") {
            Some((package, rest)) => (package, Some(rest)),
            None => (candidate, None),
        };

        let base = match crate_name(package) {
            Ok(FoundCrate::Itself) => quote!(crate),
            Ok(FoundCrate::Name(name)) => {
                let id = Ident::new(&name, Span::call_site());
                quote!(#id)
            }
            Err(_) => continue,
        };

        let Some(module_path) = module_path else {
            return base;
        };

        return match syn::parse_str::<syn::Path>(module_path) {
            Ok(path) => quote!(#base::#path),
            Err(_) => base,
        };
    }

    let list = candidates
        .iter()
        .map(|c| format!("`{}`", c))
        .collect::<Vec<_>>()
        .join(", ");
    let msg = format!(
        "HushZero: could not find any of {}. Add `hush-zero` to your Cargo.toml.",
        list
    );
    let lit = LitStr::new(&msg, Span::call_site());
    quote! { compile_error!(#lit); }
}

/// Detects `ZeroizeOnDropSentinel` by the last segment of the type path.
pub(crate) fn is_zeroize_on_drop_sentinel_type(ty: &Type) -> bool {
    matches!(
        ty,
        Type::Path(type_path)
        if type_path.path.segments.last()
            .map(|seg| seg.ident == "ZeroizeOnDropSentinel")
            .unwrap_or(false)
    )
}

/// `&mut T` fields are reborrowed (`&mut *self.f`) instead of taken as `&mut &mut T`.
pub(crate) fn is_mut_reference_type(ty: &Type) -> bool {
    matches!(ty, Type::Reference(r) if r.mutability.is_some())
}

pub(crate) fn is_immut_reference_type(ty: &Type) -> bool {
    matches!(ty, Type::Reference(r) if r.mutability.is_none())
}

/// Flags collected from `#[fast_zeroize(...)]` attributes.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct FastZeroizeFlags {
    pub(crate) skip: bool,
    pub(crate) drop: bool,
    pub(crate) opaque: bool,
    pub(crate) self_zeroize: bool,
}

/// Parses every `#[fast_zeroize(...)]` attribute in `attrs`.
///
/// Unknown flags are an error rather than silently ignored.
pub(crate) fn parse_flags(attrs: &[Attribute]) -> Result<FastZeroizeFlags, syn::Error> {
    let mut flags = FastZeroizeFlags::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident("fast_zeroize")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                flags.skip = true;
            } else if meta.path.is_ident("drop") {
                flags.drop = true;
            } else if meta.path.is_ident("opaque") {
                flags.opaque = true;
            } else if meta.path.is_ident("self_zeroize") {
                flags.self_zeroize = true;
            } else {
                return Err(meta.error(
                    "unknown fast_zeroize flag; expected one of `skip`, `drop`, `opaque`, `self_zeroize`",
                ));
            }
            Ok(())
        })?;
    }

    Ok(flags)
}

fn field_label(field: &syn::Field, index: usize) -> String {
    match &field.ident {
        Some(ident) => format!("field `{}`", ident),
        None => format!("field at index {}", index),
    }
}

/// Per-field role after attribute parsing.
struct FieldPlan<'a> {
    index: usize,
    field: &'a syn::Field,
    flags: FastZeroizeFlags,
    is_sentinel: bool,
}

impl FieldPlan<'_> {
    fn is_walked(&self) -> bool {
        !self.flags.skip && !self.flags.opaque
    }

    fn access(&self) -> TokenStream2 {
        match &self.field.ident {
            Some(ident) => quote! { self.#ident },
            None => {
                let idx = Index::from(self.index);
                quote! { self.#idx }
            }
        }
    }

    fn mut_ref(&self) -> TokenStream2 {
        let access = self.access();
        if is_mut_reference_type(&self.field.ty) {
            quote! { &mut *#access }
        } else {
            quote! { &mut #access }
        }
    }

    fn immut_ref(&self) -> TokenStream2 {
        let access = self.access();
        if is_mut_reference_type(&self.field.ty) {
            quote! { &*#access }
        } else {
            quote! { &#access }
        }
    }
}

/// Expands the derive input into the trait implementations.
fn expand(input: DeriveInput) -> Result<TokenStream2, TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // 1) Resolve the engine crate (prefer hush-zero-core)
    let root = find_root_with_candidates(&["hush-zero-core", "hush-zero", "hush::zero"]);

    // 2) Struct-level flags
    let struct_flags = parse_flags(&input.attrs).map_err(|e| e.to_compile_error())?;

    // 3) Collect fields; anything but a struct is an unrecognized shape
    let fields: Vec<&syn::Field> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().collect(),
            Fields::Unnamed(unnamed) => unnamed.unnamed.iter().collect(),
            Fields::Unit => vec![],
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "HushZero can only be derived for structs (named, tuple or unit).",
            )
            .to_compile_error());
        }
    };

    // 4) Classify fields and locate the sentinel
    let sentinel_ident = format_ident!("__sentinel");
    let mut plans = Vec::with_capacity(fields.len());
    let mut sentinel_found = false;

    for (index, field) in fields.into_iter().enumerate() {
        let flags = parse_flags(&field.attrs).map_err(|e| e.to_compile_error())?;
        let is_sentinel = !sentinel_found
            && match &field.ident {
                Some(ident) => *ident == sentinel_ident,
                None => is_zeroize_on_drop_sentinel_type(&field.ty),
            };
        sentinel_found |= is_sentinel;

        plans.push(FieldPlan {
            index,
            field,
            flags,
            is_sentinel,
        });
    }

    // 5) Validate
    for plan in &plans {
        if plan.is_sentinel || plan.flags.skip {
            continue;
        }

        if plan.flags.opaque && !struct_flags.self_zeroize {
            return Err(syn::Error::new_spanned(
                plan.field,
                format!(
                    "{} of `{}` is #[fast_zeroize(opaque)] but `{}` does not declare \
                     #[fast_zeroize(self_zeroize)]; implement `SelfZeroize` and add the \
                     attribute, or mark the field #[fast_zeroize(skip)].",
                    field_label(plan.field, plan.index),
                    struct_name,
                    struct_name,
                ),
            )
            .to_compile_error());
        }

        if is_immut_reference_type(&plan.field.ty) && !plan.flags.opaque {
            return Err(syn::Error::new_spanned(
                &plan.field.ty,
                format!(
                    "{} has type `&T` (immutable reference) which cannot be zeroized. \
                     Add `#[fast_zeroize(skip)]` to exclude it from zeroization.",
                    field_label(plan.field, plan.index),
                ),
            )
            .to_compile_error());
        }
    }

    // 6) Field references
    //    - clearing: every walked field, sentinel included (last, so it flips
    //      only once the data is gone)
    //    - probing: every walked field except the sentinel
    let probe_refs: Vec<TokenStream2> = plans
        .iter()
        .filter(|p| p.is_walked() && !p.is_sentinel)
        .map(FieldPlan::immut_ref)
        .collect();

    let clear_refs: Vec<TokenStream2> = plans
        .iter()
        .filter(|p| p.is_walked() && !p.is_sentinel)
        .chain(plans.iter().filter(|p| p.is_sentinel && !p.flags.skip))
        .map(FieldPlan::mut_ref)
        .collect();

    let probe_len = syn::LitInt::new(&probe_refs.len().to_string(), Span::call_site());
    let clear_len = syn::LitInt::new(&clear_refs.len().to_string(), Span::call_site());

    let (self_zeroize_call, self_zeroize_probe) = if struct_flags.self_zeroize {
        (
            quote! { #root::SelfZeroize::self_zeroize(self); },
            quote! {
                if !#root::SelfZeroize::is_self_zeroized(self) {
                    return false;
                }
            },
        )
    } else {
        (quote! {}, quote! {})
    };

    // 7) Emit the trait implementations
    let drop_impl = if struct_flags.drop {
        quote! {
            impl #impl_generics Drop for #struct_name #ty_generics #where_clause {
                fn drop(&mut self) {
                    #root::FastZeroizable::fast_zeroize(self);
                }
            }
        }
    } else {
        quote! {}
    };

    let assert_impl = match plans.iter().find(|p| p.is_sentinel) {
        Some(sentinel) => {
            let sentinel_access = sentinel.access();
            quote! {
                impl #impl_generics #root::AssertZeroizeOnDrop for #struct_name #ty_generics #where_clause {
                    fn clone_sentinel(&self) -> #root::ZeroizeOnDropSentinel {
                        #sentinel_access.clone()
                    }

                    fn assert_zeroize_on_drop(self) {
                        #root::assert::assert_zeroize_on_drop(self);
                    }
                }
            }
        }
        None => quote! {},
    };

    Ok(quote! {
        impl #impl_generics #root::ZeroizeMetadata for #struct_name #ty_generics #where_clause {
            const CAN_BE_BULK_ZEROIZED: bool = false;
        }

        impl #impl_generics #root::FastZeroizable for #struct_name #ty_generics #where_clause {
            fn fast_zeroize(&mut self) {
                #self_zeroize_call
                let fields: [&mut dyn #root::FastZeroizable; #clear_len] = [
                    #( #root::collections::to_fast_zeroizable_dyn_mut(#clear_refs) ),*
                ];
                #root::collections::zeroize_collection(&mut fields.into_iter())
            }
        }

        impl #impl_generics #root::ZeroizationProbe for #struct_name #ty_generics #where_clause {
            fn is_zeroized(&self) -> bool {
                #self_zeroize_probe
                let fields: [&dyn #root::ZeroizationProbe; #probe_len] = [
                    #( #root::collections::to_zeroization_probe_dyn_ref(#probe_refs) ),*
                ];
                #root::collections::collection_zeroed(&mut fields.into_iter())
            }
        }

        #drop_impl
        #assert_impl
    })
}
