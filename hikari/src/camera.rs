use crate::math::{Ray, Vec2, Vec3};

/// User-facing description of a pinhole camera.
#[derive(Copy, Clone, Debug)]
pub struct CameraParameters {
    /// Image resolution in pixels.
    pub resolution: Vec2<u32>,
    pub position: Vec3<f32>,
    pub look_at: Vec3<f32>,
    pub up: Vec3<f32>,
    /// Full vertical field of view in degrees.
    pub fov_y: f32,
}

impl Default for CameraParameters {
    fn default() -> Self {
        Self {
            resolution: Vec2::new(800, 800),
            position: Vec3::new(0.0, 0.0, 0.0),
            look_at: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov_y: 45.0,
        }
    }
}

/// An immutable pinhole camera with an orthonormal view basis.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    pub resolution: Vec2<u32>,
    pub position: Vec3<f32>,
    pub view: Vec3<f32>,
    pub right: Vec3<f32>,
    pub up: Vec3<f32>,
    /// Extent of a single pixel on the image plane at unit distance.
    pub pixel_length: Vec2<f32>,
}

impl Camera {
    /// Creates a new `Camera`, deriving the basis and pixel extent from `params`.
    pub fn new(params: CameraParameters) -> Self {
        let view = (params.look_at - params.position).normalized();
        let right = view.cross(params.up).normalized();
        let up = right.cross(view);

        let width = params.resolution.x as f32;
        let height = params.resolution.y as f32;
        let y_scaled = (params.fov_y.to_radians() * 0.5).tan();
        let x_scaled = y_scaled * width / height;

        Self {
            resolution: params.resolution,
            position: params.position,
            view,
            right,
            up,
            pixel_length: Vec2::new(2.0 * x_scaled / width, 2.0 * y_scaled / height),
        }
    }

    /// Returns the number of pixels on the image plane.
    pub fn pixel_count(&self) -> usize {
        (self.resolution.x as usize) * (self.resolution.y as usize)
    }

    /// Creates the primary [Ray] through pixel (`x`, `y`) offset by `jitter` pixels.
    ///
    /// Pixel x grows towards -right and pixel y towards -up.
    pub fn ray(&self, x: u32, y: u32, jitter: Vec2<f32>) -> Ray<f32> {
        let half_width = self.resolution.x as f32 * 0.5;
        let half_height = self.resolution.y as f32 * 0.5;
        let d = self.view
            - self.right * (self.pixel_length.x * (x as f32 + jitter.x - half_width))
            - self.up * (self.pixel_length.y * (y as f32 + jitter.y - half_height));
        Ray::new(self.position, d.normalized())
    }
}
