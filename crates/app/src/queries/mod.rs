pub mod get_client;
pub mod list_clients;
