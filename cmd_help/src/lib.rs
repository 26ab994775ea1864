use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DataEnum, DeriveInput, Expr, ExprLit, Lit, Meta, parse_macro_input};

/// 收集文档注释的全部行，去掉`///`之后紧跟的单个空格，保留其余缩进。
fn extract_doc(attrs: &[Attribute]) -> String {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit { lit: Lit::Str(s), .. }) => Some(s.value()),
                _ => None,
            },
            _ => None,
        })
        .map(|line| line.strip_prefix(' ').map(str::to_string).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 为枚举生成`all_help()`：按声明顺序返回每个变体的`(name, doc)`，跳过没有文档的变体。
#[proc_macro_derive(CmdHelp)]
pub fn cmd_help_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let enum_name = &input.ident;

    let Data::Enum(DataEnum { variants, .. }) = &input.data else {
        return syn::Error::new_spanned(enum_name, "CmdHelp can only be derived on enums").to_compile_error().into();
    };

    let entries = variants.iter().filter_map(|v| {
        let doc = extract_doc(&v.attrs);
        if doc.trim().is_empty() {
            None
        } else {
            let name = v.ident.to_string();
            Some(quote! { (#name, #doc) })
        }
    });

    let expanded = quote! {
        impl #enum_name {
            /// 获取全部帮助信息：[(name, help), ...]
            pub fn all_help() -> &'static [(&'static str, &'static str)] {
                &[
                    #(#entries),*
                ]
            }
        }
    };

    TokenStream::from(expanded)
}
