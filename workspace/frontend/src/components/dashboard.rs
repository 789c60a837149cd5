mod chart;
mod kpis;
mod view;

pub use view::Dashboard;
