mod chart;
mod filter_bar;
mod table;
mod view;

pub use view::Dashboard;
