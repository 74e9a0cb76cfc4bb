mod app;
mod camera;
mod sampling;
mod scene;
mod shapes;
