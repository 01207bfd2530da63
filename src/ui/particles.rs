//! Background dots that drift diagonally across the main menu

use rand::Rng;

use crate::render::Surface;
use super::theme::{PARTICLE_COLOR, PARTICLE_RADIUS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
}

#[derive(Debug, Clone)]
pub struct Particles {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl Particles {
    /// Place `count` particles at random integer positions inside the area
    pub fn scatter(count: usize, width: f32, height: f32, rng: &mut impl Rng) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.gen_range(0..=width as u32) as f32,
                y: rng.gen_range(0..=height as u32) as f32,
                vx: 1.0,
                vy: 1.0,
            })
            .collect();
        Self { particles, width, height }
    }

    /// Move every particle one step, wrapping at the edges
    pub fn update(&mut self) {
        for p in &mut self.particles {
            p.x = (p.x + p.vx).rem_euclid(self.width);
            p.y = (p.y + p.vy).rem_euclid(self.height);
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        for p in &self.particles {
            surface.fill_circle(p.x, p.y, PARTICLE_RADIUS, PARTICLE_COLOR);
        }
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.particles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_scatter_within_area() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = Particles::scatter(50, 800.0, 600.0, &mut rng);
        assert_eq!(particles.len(), 50);
        for p in particles.iter() {
            assert!((0.0..=800.0).contains(&p.x));
            assert!((0.0..=600.0).contains(&p.y));
            assert_eq!((p.vx, p.vy), (1.0, 1.0));
        }
    }

    #[test]
    fn test_wraps_at_edges() {
        let mut particles = Particles {
            particles: vec![Particle { x: 799.0, y: 300.0, vx: 1.0, vy: 1.0 }],
            width: 800.0,
            height: 600.0,
        };
        particles.update();
        let p = particles.iter().next().unwrap();
        assert_eq!((p.x, p.y), (0.0, 301.0));

        for _ in 0..1000 {
            particles.update();
        }
        let p = particles.iter().next().unwrap();
        assert!(p.x >= 0.0 && p.x < 800.0);
        assert!(p.y >= 0.0 && p.y < 600.0);
    }
}
