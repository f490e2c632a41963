#![no_std]
#![no_main]

use defmt::{error, info, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_time::{Duration, Ticker};
use esp_backtrace as _;
use esp_hal::{
    analog::adc::{Adc, AdcConfig, Attenuation},
    delay::Delay,
    gpio::{Level, Output, OutputConfig},
    interrupt::{software::SoftwareInterruptControl, Priority},
    timer::timg::TimerGroup,
};
use esp_hal_embassy::InterruptExecutor;

use spectrum_dsp::config::{
    DEFAULT_CALIBRATION_OFFSET, DEFAULT_FRAME_INTERVAL_MS, DEFAULT_SAMPLE_RATE_HZ,
    DEFAULT_SPLASH_HOLD_MS,
};
use spectrum_dsp::{SampleAcquisition, SpectrumConfig};
use spectrum_fw::board::{GateHandle, MicAdc, SamplingGate};
use spectrum_fw::hd44780::Hd44780;
use spectrum_lcd::{FrameScheduler, Splash};

const CONFIG: SpectrumConfig = SpectrumConfig {
    sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
    calibration_offset: DEFAULT_CALIBRATION_OFFSET,
    frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
    splash_hold_ms: DEFAULT_SPLASH_HOLD_MS,
};

// Shared between the sampler (interrupt executor) and the frame loop (thread mode).
static ACQUISITION: SampleAcquisition = SampleAcquisition::new(CONFIG.calibration_offset);
static GATE: SamplingGate = SamplingGate::new();

/// Macro to create static variables
macro_rules! mk_static {
    ($t:ty,$val:expr) => {{
        static STATIC_CELL: static_cell::StaticCell<$t> = static_cell::StaticCell::new();
        #[deny(unused_attributes)]
        let x = STATIC_CELL.uninit().write(($val));
        x
    }};
}

/// Stand-in for the timer compare and conversion-complete interrupts.
///
/// Each tick first hands over a finished reading, then requests the next one.
#[embassy_executor::task]
async fn sampler(mut adc: MicAdc, mut gate: GateHandle) {
    info!("Starting sampler task");
    let ticks_per_sample = CONFIG.timer_compare_value(embassy_time::TICK_HZ as u32);
    info!(
        "Sampling every {} us ({} ticks)",
        CONFIG.sample_period_us(),
        ticks_per_sample
    );
    let mut ticker = Ticker::every(Duration::from_ticks(ticks_per_sample as u64));

    loop {
        if !gate.is_running() {
            gate.wait_until_running().await;
            ticker.reset();
        }
        ticker.next().await;

        if let Some(raw) = adc.poll() {
            ACQUISITION.on_conversion_complete(raw, &mut gate);
        }
        ACQUISITION.on_timer_tick(&mut adc);
    }
}

/// Bad configuration: never start sampling.
fn halt() -> ! {
    loop {
        core::hint::spin_loop();
    }
}

#[esp_hal_embassy::main]
async fn main(_spawner: Spawner) {
    info!("Init!");

    if let Err(err) = CONFIG.validate() {
        error!("Refusing to start: {}", err);
        halt();
    }

    let peripherals = esp_hal::init(esp_hal::Config::default());
    let sw_ints = SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    let timg0 = TimerGroup::new(peripherals.TIMG0);

    info!("Initializing Embassy");
    esp_hal_embassy::init(timg0.timer0);

    // LCD on a 4-bit bus: RS, EN, D4..D7
    let config_out = OutputConfig::default();
    let lcd = Hd44780::new(
        Output::new(peripherals.GPIO4, Level::Low, config_out),
        Output::new(peripherals.GPIO5, Level::Low, config_out),
        [
            Output::new(peripherals.GPIO6, Level::Low, config_out),
            Output::new(peripherals.GPIO7, Level::Low, config_out),
            Output::new(peripherals.GPIO15, Level::Low, config_out),
            Output::new(peripherals.GPIO16, Level::Low, config_out),
        ],
        Delay::new(),
    );

    let mut adc_config = AdcConfig::new();
    let mic_pin = adc_config.enable_pin(peripherals.GPIO1, Attenuation::_11dB);
    let adc = MicAdc::new(Adc::new(peripherals.ADC1, adc_config), mic_pin);

    let gate = GateHandle::new(&GATE);

    // Sampling preempts the frame loop, like an interrupt handler would.
    let hp_executor = mk_static!(
        InterruptExecutor<2>,
        InterruptExecutor::new(sw_ints.software_interrupt2)
    );
    let high_pri_spawner = hp_executor.start(Priority::Priority3);
    high_pri_spawner.must_spawn(sampler(adc, gate));

    let mut scheduler = FrameScheduler::new(&ACQUISITION, gate, lcd, Delay::new(), CONFIG);
    if scheduler.start(&Splash::default()).is_err() {
        warn!("Display failed during startup, sampling anyway");
    }

    info!("Entering frame loop");
    loop {
        match scheduler.run() {
            Ok(never) => match never {},
            Err(_) => warn!("Display write failed, frame skipped"),
        }
    }
}
