/// Defines a concrete synchronized entity type over a data shape.
///
/// Generates the wrapper struct around [`Synced`](crate::Synced), the routed
/// getter/setter pair for every declared field, and the dispatcher
/// registration that re-pushes a reflection-edited field through its setter.
///
/// Three kinds of declaration, in this order:
///
/// - `field name: Ty { set = .., get = .. }` — a top-level field, backed by
///   the named setter/getter on the backend service.
/// - `group name { field .. }` — a plain nested struct stored inline in the
///   data shape. Accessors are flattened (`set_name_leaf`); the dispatcher
///   gets a single whole-struct entry, so any leaf notification resolves
///   through the `(outer, outer)` fallback.
/// - `sub name: DataTy { field .. }` — a controller sub-entity
///   ([`SubEntity`](crate::SubEntity) field in the data shape). Accessors
///   route to the sub-entity's own native binding; the dispatcher gets one
///   entry per leaf plus the whole-struct fallback.
///
/// Field names must not collide with the methods of `Synced`, which the
/// generated type derefs to.
#[macro_export]
macro_rules! synced_entity {
    (
        $(#[$meta:meta])*
        $vis:vis struct $entity:ident($data:ty);
        $(
            field $fname:ident : $fty:ty { set = $nset:ident, get = $nget:ident }
        )*
        $(
            group $gname:ident {
                $(
                    field $gfname:ident : $gfty:ty { set = $gnset:ident, get = $gnget:ident }
                )*
            }
        )*
        $(
            sub $sname:ident : $sdata:ty {
                $(
                    field $sfname:ident : $sfty:ty { set = $snset:ident, get = $snget:ident }
                )*
            }
        )*
    ) => { $crate::paste::paste! {
        $(#[$meta])*
        $vis struct $entity {
            sync: $crate::Synced<$data>,
        }

        impl $entity {
            /// Creates a design-time template holding `data`.
            $vis fn new(data: $data) -> Self {
                Self {
                    sync: $crate::Synced::template(data),
                }
            }

            $(
                $vis fn $fname(&self) -> $fty {
                    self.sync.read(
                        |data| data.$fname.clone(),
                        |binding| binding.bridge().with(|service| service.$nget(binding.id())),
                    )
                }

                $vis fn [<set_ $fname>](&mut self, value: $fty) {
                    self.sync.write(
                        value,
                        |data, value| data.$fname = value,
                        |binding, value| {
                            binding
                                .bridge()
                                .with_mut(|service| service.$nset(binding.id(), value));
                        },
                    );
                }
            )*

            $($(
                $vis fn [<$gname _ $gfname>](&self) -> $gfty {
                    self.sync.read(
                        |data| data.$gname.$gfname.clone(),
                        |binding| binding.bridge().with(|service| service.$gnget(binding.id())),
                    )
                }

                $vis fn [<set_ $gname _ $gfname>](&mut self, value: $gfty) {
                    self.sync.write(
                        value,
                        |data, value| data.$gname.$gfname = value,
                        |binding, value| {
                            binding
                                .bridge()
                                .with_mut(|service| service.$gnset(binding.id(), value));
                        },
                    );
                }
            )*)*

            $($(
                $vis fn [<$sname _ $sfname>](&self) -> $sfty {
                    let target = self.sync.target();
                    let sub = &target.data().$sname;
                    if let Some(binding) = sub.binding() {
                        if let Some(value) =
                            binding.bridge().with(|service| service.$snget(binding.id()))
                        {
                            return value;
                        }
                    }
                    sub.data().$sfname.clone()
                }

                $vis fn [<set_ $sname _ $sfname>](&mut self, value: $sfty) {
                    let target = self.sync.target_mut();
                    let sub = &mut target.data_mut().$sname;
                    sub.data_mut().$sfname = value.clone();
                    if let Some(binding) = sub.binding() {
                        binding
                            .bridge()
                            .with_mut(|service| service.$snset(binding.id(), value));
                    }
                }
            )*)*

            /// Registers this type's field-change handlers, once per process.
            /// Each handler re-reads the field the host's reflection just
            /// wrote and pushes it through the routed setter.
            $vis fn register_dispatch(registry: &mut $crate::DispatchRegistry) {
                registry.init::<$entity>(stringify!($entity), |dispatcher| {
                    $(
                        dispatcher.add(stringify!($fname), |entity: &mut $entity| {
                            let value = entity.sync.data().$fname.clone();
                            entity.[<set_ $fname>](value);
                        });
                    )*
                    $(
                        dispatcher.add(stringify!($gname), |entity: &mut $entity| {
                            $(
                                let value = entity.sync.data().$gname.$gfname.clone();
                                entity.[<set_ $gname _ $gfname>](value);
                            )*
                        });
                    )*
                    $(
                        dispatcher.add(stringify!($sname), |entity: &mut $entity| {
                            $(
                                let value = entity.sync.data().$sname.data().$sfname.clone();
                                entity.[<set_ $sname _ $sfname>](value);
                            )*
                        });
                        $(
                            dispatcher.add_pair(
                                stringify!($sname),
                                stringify!($sfname),
                                |entity: &mut $entity| {
                                    let value =
                                        entity.sync.data().$sname.data().$sfname.clone();
                                    entity.[<set_ $sname _ $sfname>](value);
                                },
                            );
                        )*
                    )*
                });
            }
        }

        impl ::std::ops::Deref for $entity {
            type Target = $crate::Synced<$data>;

            fn deref(&self) -> &Self::Target {
                &self.sync
            }
        }

        impl ::std::ops::DerefMut for $entity {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.sync
            }
        }

        impl ::std::default::Default for $entity {
            fn default() -> Self {
                Self::new(<$data as ::std::default::Default>::default())
            }
        }
    } };
}
