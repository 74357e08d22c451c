pub mod linspace;
pub mod plot_area;
