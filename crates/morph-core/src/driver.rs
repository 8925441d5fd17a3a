use crate::camera::FieldCamera;
use crate::config::FieldConfig;
use crate::error::RenderError;
use crate::morph::{MorphScheduler, MorphStep};
use crate::renderer::{ParticleBuffer, PointRenderer, PointUniforms};
use crate::store::ParticleStore;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Owns the particle field and its renderer and turns host repaints into
/// draws.
///
/// The driver is the only owner of the renderer, so dropping it releases every
/// GPU resource the effect holds.
pub struct FrameDriver<R: PointRenderer> {
    config: FieldConfig,
    camera: FieldCamera,
    store: ParticleStore,
    morph: MorphScheduler,
    renderer: R,
    viewport: (u32, u32),
    failed_frames: u32,
}

impl<R: PointRenderer> FrameDriver<R> {
    /// Randomize the field and upload every attribute stream.
    pub fn new(config: FieldConfig, renderer: R, viewport: (u32, u32)) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let store = ParticleStore::new(config.particle_count, &mut rng);
        let morph = MorphScheduler::new(config.morph_duration_sec, config.fixed_step_sec, rng);
        let mut driver = Self {
            camera: FieldCamera::from_config(&config),
            config,
            store,
            morph,
            renderer,
            viewport,
            failed_frames: 0,
        };
        driver.upload_all();
        log::info!(
            "[field] particles={} morph={:.2}s viewport={}x{}",
            driver.store.len(),
            driver.config.morph_duration_sec,
            viewport.0,
            viewport.1
        );
        driver
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    pub fn morph(&self) -> &MorphScheduler {
        &self.morph
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Consecutive frames whose draw failed; zero after any successful draw.
    pub fn failed_frames(&self) -> u32 {
        self.failed_frames
    }

    /// Start a morph into the next shape unless one is already running.
    pub fn request_morph(&mut self) -> bool {
        let started = self.morph.request_morph(&mut self.store);
        if started {
            log::info!("[morph] -> {}", self.morph.shape().name());
        } else {
            log::debug!("[morph] ignored; already morphing");
        }
        started
    }

    /// Re-randomize the field and rewrite every attribute stream.
    pub fn reset(&mut self) {
        self.morph.reset(&mut self.store);
        self.upload_all();
        log::info!("[field] reset");
    }

    /// Render one frame for a host surface of `viewport` pixels, `time_sec`
    /// seconds after the animation started.
    pub fn render_frame(&mut self, viewport: (u32, u32), time_sec: f32) -> Result<(), RenderError> {
        self.resize_if_needed(viewport);

        match self.morph.advance(&mut self.store) {
            MorphStep::Idle => {}
            MorphStep::Eased(_) => self.upload(ParticleBuffer::Positions),
            MorphStep::Finished => {
                self.upload(ParticleBuffer::Positions);
                log::info!("[morph] settled on {}", self.morph.shape().name());
            }
        }

        let uniforms = self.uniforms(time_sec);
        self.renderer.set_uniforms(&uniforms);
        let drawn = self.renderer.draw_points(self.store.len() as u32);
        match drawn {
            Ok(()) => self.failed_frames = 0,
            Err(_) => self.failed_frames = self.failed_frames.saturating_add(1),
        }
        drawn
    }

    pub fn uniforms(&self, time_sec: f32) -> PointUniforms {
        let (w, h) = self.viewport;
        PointUniforms::new(
            self.camera.projection_matrix(w, h),
            self.camera.view_matrix(time_sec),
            [w as f32, h as f32],
            self.config.point_size_px,
            time_sec,
            self.config.wobble_amplitude,
        )
    }

    fn resize_if_needed(&mut self, viewport: (u32, u32)) {
        if viewport.0 == 0 || viewport.1 == 0 || viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        self.renderer.resize(viewport.0, viewport.1);
        log::debug!("[field] resized to {}x{}", viewport.0, viewport.1);
    }

    fn upload_all(&mut self) {
        for buffer in ParticleBuffer::ALL {
            self.upload(buffer);
        }
    }

    fn upload(&mut self, buffer: ParticleBuffer) {
        let data = match buffer {
            ParticleBuffer::Positions => self.store.position_floats(),
            ParticleBuffer::Velocities => self.store.velocity_floats(),
            ParticleBuffer::Colors => self.store.color_floats(),
        };
        let expected = self.store.len() * buffer.components();
        if data.len() != expected {
            log::warn!(
                "[field] skipping {} upload: {} floats, expected {}",
                buffer.label(),
                data.len(),
                expected
            );
            return;
        }
        self.renderer.write_buffer(buffer, data);
    }
}
