mod predict_form;
mod recent_table;
mod view;

pub use view::Modeler;
