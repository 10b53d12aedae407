pub mod gtk;
