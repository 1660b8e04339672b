pub mod graphql_client;

pub use graphql_client::GraphqlClient;
