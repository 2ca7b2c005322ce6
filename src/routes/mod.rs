pub mod command_routes;
