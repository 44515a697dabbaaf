//! Item emission: the mock struct, its channel groups, constructor and trait impls.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::super::method::{Carry, ProtocolStep, SyncField};
use super::super::mock::{MockDefinition, MockMethod};
use super::super::naming::ident;
use super::MockEmitter;
use crate::decl::Receiver;

/// Field declarations and initializers of one channel group.
struct Group {
    fields: Vec<TokenStream>,
    inits: Vec<TokenStream>,
}

impl MockEmitter<'_> {
    /// Emit every item belonging to one mock.
    pub(super) fn emit_mock(&self, def: &MockDefinition) -> TokenStream {
        let mock = format_ident!("{}", def.type_name());
        let mut groups = Vec::new();
        let mut fields = Vec::new();
        let mut inits = Vec::new();

        for m in &def.methods {
            let called = ident(&m.called_field());
            let ctor = self.emit_chan_ctor(def, Carry::Value);
            fields.push(quote! { pub #called: ::chanmock_rt::Chan<bool> });
            inits.push(quote! { #called: #ctor });

            if let Some(group_field) = m.input_field() {
                let group_ty = format_ident!("{}", def.input_type_name(m));
                let group = self.emit_group(def, &m.inputs());
                let (gf, gi) = (&group.fields, &group.inits);
                groups.push(quote! {
                    #[derive(Debug)]
                    pub struct #group_ty {
                        #(#gf),*
                    }
                });
                let g = ident(&group_field);
                fields.push(quote! { pub #g: #group_ty });
                inits.push(quote! { #g: #group_ty { #(#gi),* } });
            }

            if let Some(group_field) = m.output_field() {
                let group_ty = format_ident!("{}", def.output_type_name(m));
                let outputs = m.outputs();
                let group = self.emit_group(def, &outputs);
                let (gf, gi) = (&group.fields, &group.inits);
                let members: Vec<_> = outputs.iter().map(|f| ident(&f.name)).collect();
                groups.push(quote! {
                    #[derive(Debug)]
                    pub struct #group_ty {
                        #(#gf),*
                    }

                    impl ::chanmock_rt::ReturnSink for #group_ty {
                        fn shape(&self) -> ::chanmock_rt::SinkShape<'_> {
                            ::chanmock_rt::SinkShape::Aggregate(::std::vec![
                                #(&self.#members as &dyn ::chanmock_rt::Slot),*
                            ])
                        }
                    }
                });
                let g = ident(&group_field);
                fields.push(quote! { pub #g: #group_ty });
                inits.push(quote! { #g: #group_ty { #(#gi),* } });
            }
        }

        let impls: Vec<_> = def
            .impls
            .iter()
            .map(|imp| {
                let path = self.emit_path(&imp.path);
                let methods: Vec<_> = def.methods_of(&imp.trait_name).map(|m| self.emit_method(m)).collect();
                quote! {
                    impl #path for #mock {
                        #(#methods)*
                    }
                }
            })
            .collect();

        quote! {
            #(#groups)*

            #[derive(Debug)]
            pub struct #mock {
                #(#fields),*
            }

            impl #mock {
                pub fn new() -> Self {
                    Self {
                        #(#inits),*
                    }
                }
            }

            impl ::std::default::Default for #mock {
                fn default() -> Self {
                    Self::new()
                }
            }

            #(#impls)*
        }
    }

    fn emit_group(&self, def: &MockDefinition, members: &[&SyncField]) -> Group {
        let mut group = Group {
            fields: Vec::with_capacity(members.len()),
            inits: Vec::with_capacity(members.len()),
        };
        for field in members {
            let name = ident(&field.name);
            let ty = self.emit_field_type(field);
            let ctor = self.emit_chan_ctor(def, field.carry);
            group.fields.push(quote! { pub #name: ::chanmock_rt::Chan<#ty> });
            group.inits.push(quote! { #name: #ctor });
        }
        group
    }

    fn emit_chan_ctor(&self, def: &MockDefinition, carry: Carry) -> TokenStream {
        let cap = proc_macro2::Literal::usize_unsuffixed(def.chan_size);
        match carry {
            Carry::Nullable => quote! { ::chanmock_rt::Chan::nullable(#cap) },
            _ => quote! { ::chanmock_rt::Chan::new(#cap) },
        }
    }

    /// Emit one trait method whose body runs the synthesized protocol.
    fn emit_method(&self, m: &MockMethod) -> TokenStream {
        let name = ident(&m.sig.name);
        let receiver = match m.sig.receiver {
            Receiver::Ref => quote! { &self },
            Receiver::RefMut => quote! { &mut self },
            Receiver::Owned => quote! { self },
        };
        let params: Vec<_> = m
            .synthesis
            .params
            .iter()
            .map(|p| {
                let binding = ident(&p.binding);
                let ty = self.emit_type(&p.ty);
                quote! { #binding: #ty }
            })
            .collect();

        let results: Vec<_> = m.sig.results.iter().map(|r| self.emit_type(&r.ty)).collect();
        let ret = match results.as_slice() {
            [] => quote! {},
            [single] => quote! { -> #single },
            many => quote! { -> (#(#many),*) },
        };

        let body: Vec<_> = m.synthesis.protocol.iter().map(|step| self.emit_step(m, step)).collect();

        quote! {
            fn #name(#receiver #(, #params)*) #ret {
                #(#body)*
            }
        }
    }

    fn emit_step(&self, m: &MockMethod, step: &ProtocolStep) -> TokenStream {
        match step {
            ProtocolStep::Signal { .. } => {
                let called = ident(&m.called_field());
                quote! { self.#called.send(true); }
            }
            ProtocolStep::SendInput {
                field,
                binding,
                owned_from,
            } => {
                let group = group_ident(m.input_field());
                let field = ident(field);
                let binding = ident(binding);
                let value = match owned_from {
                    Some(inner) => {
                        let inner = self.emit_qualified_self(inner);
                        quote! { <#inner as ::std::borrow::ToOwned>::to_owned(#binding) }
                    }
                    None => quote! { #binding },
                };
                quote! { self.#group.#field.send(#value); }
            }
            ProtocolStep::AwaitOutputs { fields } => {
                let group = group_ident(m.output_field());
                let recvs: Vec<_> = fields
                    .iter()
                    .map(|f| {
                        let f = ident(f);
                        quote! { self.#group.#f.recv() }
                    })
                    .collect();
                match recvs.as_slice() {
                    [single] => quote! { #single },
                    many => quote! { (#(#many),*) },
                }
            }
            ProtocolStep::AwaitGate { field } => {
                let group = group_ident(m.output_field());
                let field = ident(field);
                quote! { self.#group.#field.recv(); }
            }
        }
    }
}

/// The group field exists whenever a step refers to it.
fn group_ident(field: Option<String>) -> proc_macro2::Ident {
    ident(&field.expect("INVARIANT: protocol steps only reference groups that have members"))
}
