pub mod fortios;
