#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use hikari::{
        camera::{Camera, CameraParameters},
        math::{Vec2, Vec3},
    };

    fn square_camera(res: u32, fov_y: f32) -> Camera {
        Camera::new(CameraParameters {
            resolution: Vec2::new(res, res),
            fov_y,
            ..CameraParameters::default()
        })
    }

    #[test]
    fn basis() {
        let cam = Camera::new(CameraParameters {
            resolution: Vec2::new(16, 9),
            position: Vec3::new(1.0, 2.0, 3.0),
            look_at: Vec3::new(4.0, -1.0, 0.0),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov_y: 60.0,
        });
        assert_relative_eq!(cam.view.len(), 1.0);
        assert_relative_eq!(cam.right.len(), 1.0);
        assert_relative_eq!(cam.up.len(), 1.0);
        assert_abs_diff_eq!(cam.view.dot(cam.right), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(cam.view.dot(cam.up), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(cam.right.dot(cam.up), 0.0, epsilon = 1e-6);
        assert_eq!(cam.pixel_count(), 16 * 9);
    }

    #[test]
    fn default_basis() {
        let cam = square_camera(4, 45.0);
        assert_relative_eq!(cam.view, Vec3::new(0.0, 0.0, -1.0));
        assert_relative_eq!(cam.right, Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(cam.up, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn pixel_length() {
        // tan(45deg) = 1 so the image plane spans [-1, 1] at unit distance
        let cam = square_camera(2, 90.0);
        assert_relative_eq!(cam.pixel_length.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(cam.pixel_length.y, 1.0, epsilon = 1e-6);

        let cam = Camera::new(CameraParameters {
            resolution: Vec2::new(4, 2),
            fov_y: 90.0,
            ..CameraParameters::default()
        });
        // Square pixels
        assert_relative_eq!(cam.pixel_length.x, cam.pixel_length.y, epsilon = 1e-6);
    }

    #[test]
    fn center_ray() {
        let cam = square_camera(2, 90.0);
        let ray = cam.ray(1, 1, Vec2::zeros());
        assert_eq!(ray.o, Vec3::zeros());
        assert_relative_eq!(ray.d, Vec3::new(0.0, 0.0, -1.0));

        // Jitter shifts by whole pixels in the same units
        let ray = cam.ray(0, 0, Vec2::new(1.0, 1.0));
        assert_relative_eq!(ray.d, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn ray_orientation() {
        let cam = square_camera(2, 90.0);
        // Pixel x grows towards -right, pixel y towards -up
        let ray = cam.ray(0, 1, Vec2::zeros());
        assert_relative_eq!(ray.d, Vec3::new(1.0, 0.0, -1.0).normalized());
        let ray = cam.ray(1, 0, Vec2::zeros());
        assert_relative_eq!(ray.d, Vec3::new(0.0, 1.0, -1.0).normalized());
    }

    #[test]
    fn rays_are_normalized() {
        let cam = square_camera(8, 45.0);
        for y in 0..8 {
            for x in 0..8 {
                let d = cam.ray(x, y, Vec2::new(0.25, -0.25)).d;
                assert_relative_eq!(d.len(), 1.0, epsilon = 1e-6);
                assert!(d.dot(cam.view) > 0.0);
            }
        }
    }
}
