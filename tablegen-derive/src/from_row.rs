//! FromRow derive macro implementation

use proc_macro2::TokenStream;
use quote::quote;
use syn::{spanned::Spanned, Data, DeriveInput, Error, Field, Fields, Ident, Result};

/// How a single struct field is populated
enum Source {
    /// Read the column, NULL is an error unless the type is an `Option`
    Column,
    /// Read the column, NULL becomes `Default::default()`
    ColumnOrDefault,
    /// Never read
    Skip,
}

struct FieldConfig {
    ident: Ident,
    column_name: String,
    source: Source,
    ty: syn::Type,
}

fn parse_field_config(field: &Field) -> Result<FieldConfig> {
    let ident = field
        .ident
        .clone()
        .ok_or_else(|| Error::new(field.span(), "tuple structs are not supported"))?;

    let mut column_name = ident.to_string();
    let mut source = Source::Column;

    for attr in &field.attrs {
        if !attr.path().is_ident("tablegen") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let lit: syn::LitStr = meta.value()?.parse()?;
                column_name = lit.value();
            } else if meta.path.is_ident("default") {
                source = Source::ColumnOrDefault;
            } else if meta.path.is_ident("skip") {
                source = Source::Skip;
            } else {
                return Err(meta.error(format!(
                    "unknown tablegen attribute `{}`",
                    meta.path
                        .get_ident()
                        .map(|i| i.to_string())
                        .unwrap_or_default()
                )));
            }
            Ok(())
        })?;
    }

    Ok(FieldConfig {
        ident,
        column_name,
        source,
        ty: field.ty.clone(),
    })
}

pub fn derive_from_row_impl(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => return Err(Error::new(input.span(), "only named fields are supported")),
        },
        _ => return Err(Error::new(input.span(), "only structs are supported")),
    };

    let configs = fields
        .iter()
        .map(parse_field_config)
        .collect::<Result<Vec<_>>>()?;

    let extractions = configs.iter().map(|config| {
        let field_ident = &config.ident;
        let column_name = &config.column_name;
        let ty = &config.ty;

        match config.source {
            Source::Column => quote! {
                #field_ident: tablegen_db::RowExt::get::<#ty>(row, #column_name)?
            },
            Source::ColumnOrDefault => quote! {
                #field_ident: tablegen_db::RowExt::get::<std::option::Option<#ty>>(row, #column_name)?
                    .unwrap_or_default()
            },
            Source::Skip => quote! {
                #field_ident: <#ty as std::default::Default>::default()
            },
        }
    });

    let column_names = configs
        .iter()
        .filter(|c| !matches!(c.source, Source::Skip))
        .map(|c| c.column_name.as_str());

    Ok(quote! {
        impl #impl_generics tablegen_db::FromRow for #name #ty_generics #where_clause {
            fn from_row<R: tablegen_db::Row>(row: &R) -> tablegen_db::Result<Self> {
                Ok(Self {
                    #(#extractions),*
                })
            }

            fn column_names() -> &'static [&'static str] {
                &[#(#column_names),*]
            }
        }
    })
}
