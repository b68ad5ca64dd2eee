#[macro_export]
macro_rules! impl_client_methods {
    ($client_name:ident, $entity:ty, $id:ty, $error:ty, $entity_name_snake:ident) => {
        paste::paste! {
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<get_ $entity_name_snake>](&self, id: $id) -> Result<Option<$entity>, $error> {
                    tracing::debug!("Sending request");
                    self.inner.get(id).await.map_err(<$error>::from)
                }
            }
        }
    };
}

#[macro_export]
macro_rules! impl_client_new {
    ($client_name:ident, $entity:ty) => {
        impl $client_name {
            pub fn new(inner: $crate::actor_framework::ResourceClient<$entity>) -> Self {
                Self { inner }
            }
        }
    };
}

#[macro_export]
macro_rules! impl_basic_client {
    ($client_name:ident, $entity:ty, $id:ty, $error:ty, $entity_name_snake:ident) => {
        $crate::impl_client_new!($client_name, $entity);
        $crate::impl_client_methods!($client_name, $entity, $id, $error, $entity_name_snake);
    };
}
