use super::{PerfTimer, WorldCore};

pub(super) fn step(world: &mut WorldCore) {
    if world.paused {
        return;
    }

    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.body_count = world.bodies.len() as u32;
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let params = world.step_params();
    let bodies_start = if perf_on { Some(PerfTimer::start()) } else { None };
    let counts = world.bodies.update(&params, &mut world.pending_sounds);
    if let Some(t0) = bodies_start {
        world.perf_stats.bodies_ms = t0.elapsed_ms();
    }

    // JS stopped draining (tab hidden, audio suspended): drop the oldest.
    let cap = world.settings.max_pending_sounds;
    if world.pending_sounds.len() > cap {
        let excess = world.pending_sounds.len() - cap;
        world.pending_sounds.drain(..excess);
    }

    world.frame += 1;

    if let Some(t0) = step_start {
        world.perf_stats.step_ms = t0.elapsed_ms();
        world.perf_stats.bodies_integrated = counts.integrated;
        world.perf_stats.contacts = counts.contacts;
        world.perf_stats.sound_events = counts.sound_events;
        world.perf_stats.pending_sounds = world.pending_sounds.len() as u32;
    }
}
