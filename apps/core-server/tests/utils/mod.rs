pub mod api_clients;
