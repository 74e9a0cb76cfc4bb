#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use hikari::{
        accel::{Accelerator, LinearScan},
        math::{
            transforms::{placement, translation},
            Ray, Transform, Vec3,
        },
        shapes::{Cube, Primitive, Shape, Sphere},
    };

    fn ray(o: (f32, f32, f32), d: (f32, f32, f32)) -> Ray<f32> {
        Ray::new(Vec3::new(o.0, o.1, o.2), Vec3::new(d.0, d.1, d.2).normalized())
    }

    #[test]
    fn sphere_outside_hit() {
        // Diameter 1 at the origin
        let s = Sphere::new(&Transform::default());
        let hit = s.intersect(ray((0.0, 0.0, 5.0), (0.0, 0.0, -1.0))).unwrap();
        assert_relative_eq!(hit.t, 4.5, epsilon = 1e-5);
        assert_relative_eq!(hit.n, Vec3::new(0.0, 0.0, 1.0), epsilon = 1e-5);
        assert!(hit.outside);
    }

    #[test]
    fn sphere_inside_hit() {
        let s = Sphere::new(&placement(Vec3::zeros(), Vec3::zeros(), Vec3::ones() * 20.0));
        let hit = s.intersect(ray((0.0, 0.0, 0.0), (1.0, 0.0, 0.0))).unwrap();
        assert_relative_eq!(hit.t, 10.0, epsilon = 1e-4);
        // Normal faces against the ray
        assert_relative_eq!(hit.n, Vec3::new(-1.0, 0.0, 0.0), epsilon = 1e-5);
        assert!(!hit.outside);
    }

    #[test]
    fn sphere_miss() {
        let s = Sphere::new(&translation(Vec3::new(0.0, 0.0, -5.0)));
        assert!(s.intersect(ray((0.0, 2.0, 0.0), (0.0, 0.0, -1.0))).is_none());
        // Behind the origin
        assert!(s.intersect(ray((0.0, 0.0, 0.0), (0.0, 0.0, 1.0))).is_none());
    }

    #[test]
    fn sphere_scaled_distance() {
        let s = Sphere::new(&placement(
            Vec3::new(0.0, 0.0, -10.0),
            Vec3::zeros(),
            Vec3::ones() * 4.0,
        ));
        let hit = s.intersect(ray((0.0, 0.0, 0.0), (0.0, 0.0, -1.0))).unwrap();
        assert_relative_eq!(hit.t, 8.0, epsilon = 1e-4);
    }

    #[test]
    fn cube_hit() {
        let c = Cube::new(&placement(
            Vec3::new(0.0, 0.0, -5.0),
            Vec3::zeros(),
            Vec3::ones() * 2.0,
        ));
        let hit = c.intersect(ray((0.0, 0.0, 0.0), (0.0, 0.0, -1.0))).unwrap();
        assert_relative_eq!(hit.t, 4.0, epsilon = 1e-5);
        assert_relative_eq!(hit.n, Vec3::new(0.0, 0.0, 1.0), epsilon = 1e-5);
        assert!(hit.outside);

        let hit = c.intersect(ray((5.0, 0.5, -5.0), (-1.0, 0.0, 0.0))).unwrap();
        assert_relative_eq!(hit.t, 4.0, epsilon = 1e-5);
        assert_relative_eq!(hit.n, Vec3::new(1.0, 0.0, 0.0), epsilon = 1e-5);
    }

    #[test]
    fn cube_inside_hit() {
        let c = Cube::new(&placement(Vec3::zeros(), Vec3::zeros(), Vec3::ones() * 2.0));
        let hit = c.intersect(ray((0.0, 0.0, 0.0), (0.0, 1.0, 0.0))).unwrap();
        assert_relative_eq!(hit.t, 1.0, epsilon = 1e-5);
        assert_relative_eq!(hit.n, Vec3::new(0.0, -1.0, 0.0), epsilon = 1e-5);
        assert!(!hit.outside);
    }

    #[test]
    fn cube_rotated() {
        // A cube rotated 45 degrees around y presents an edge towards +z
        let c = Cube::new(&placement(
            Vec3::zeros(),
            Vec3::new(0.0, 45.0, 0.0),
            Vec3::ones(),
        ));
        let hit = c.intersect(ray((0.0, 0.0, 5.0), (0.0, 0.0, -1.0))).unwrap();
        assert_relative_eq!(hit.t, 5.0 - 0.5 * 2.0f32.sqrt(), epsilon = 1e-4);
    }

    #[test]
    fn cube_miss() {
        let c = Cube::new(&Transform::default());
        assert!(c.intersect(ray((2.0, 0.0, 5.0), (0.0, 0.0, -1.0))).is_none());
        assert!(c.intersect(ray((0.0, 0.0, 5.0), (0.0, 0.0, 1.0))).is_none());
    }

    #[test]
    fn linear_scan_nearest() {
        let near = Primitive::new(
            Shape::Sphere(Sphere::new(&translation(Vec3::new(0.0, 0.0, -3.0)))),
            1,
        );
        let far = Primitive::new(
            Shape::Cube(Cube::new(&translation(Vec3::new(0.0, 0.0, -6.0)))),
            0,
        );
        // Order of the primitives doesn't matter
        let scan = LinearScan::new(vec![far, near]);
        assert_eq!(scan.primitive_count(), 2);

        let isect = scan.intersect(ray((0.0, 0.0, 0.0), (0.0, 0.0, -1.0)));
        assert!(isect.is_hit());
        assert_eq!(isect.material_id, 1);
        assert_relative_eq!(isect.t, 2.5, epsilon = 1e-5);
        assert_abs_diff_eq!(isect.normal, Vec3::new(0.0, 0.0, 1.0), epsilon = 1e-5);
    }

    #[test]
    fn linear_scan_miss() {
        let scan = LinearScan::new(Vec::new());
        let isect = scan.intersect(ray((0.0, 0.0, 0.0), (0.0, 0.0, -1.0)));
        assert!(!isect.is_hit());
        assert!(isect.t < 0.0);
    }
}
