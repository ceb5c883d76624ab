#[cfg(target_os = "espidf")]
use anyhow::Context;

#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::{
    delay::{Delay, FreeRtos},
    gpio,
    ledc::{config::TimerConfig, LedcDriver, LedcTimerDriver, Resolution},
    peripherals::Peripherals,
    prelude::*,
    spi,
};

#[cfg(target_os = "espidf")]
use eink_led_demo::{Button, DemoConfig, DemoTask, Led, WavesharePanel};

#[cfg(target_os = "espidf")]
use epd_waveshare::prelude::DisplayRotation;

/// Stack for the display thread, the 296x128 frame buffer lives on it
#[cfg(target_os = "espidf")]
const EINK_TASK_STACK_SIZE: usize = 16 * 1024;

/// Bring up the peripherals and run the demo; only returns on failure
#[cfg(target_os = "espidf")]
fn eink_task(peripherals: Peripherals, config: DemoConfig) -> anyhow::Result<()> {
    let pins = peripherals.pins;

    // Configure switch and LED
    let mut button_pin = gpio::PinDriver::input(pins.gpio5).context("button pin")?; // Pins::BTN_CONF
    button_pin.set_pull(gpio::Pull::Up)?;
    let button = Button::new(
        button_pin,
        FreeRtos,
        config.debounce_ms,
        config.poll_interval_ms,
    );

    // A 50% duty at a few Hz is a visible blink
    let led_hz = config.led_pwm_hz();
    if led_hz != config.led_blink_hz {
        log::warn!(
            "LED blink of {} Hz is below the LEDC timer range, using {} Hz",
            config.led_blink_hz,
            led_hz
        );
    }
    let timer = LedcTimerDriver::new(
        peripherals.ledc.timer0,
        &TimerConfig::new()
            .frequency(led_hz.Hz())
            .resolution(Resolution::Bits14),
    )
    .context("LED timer")?;
    let pwm = LedcDriver::new(peripherals.ledc.channel0, timer, pins.gpio41) // Pins::LED
        .context("LED PWM channel")?;
    let led = Led::new(pwm, config.led_polarity)?;

    // Enable display power before talking to the controller
    log::info!("Enabling display power");
    let mut display_power = gpio::PinDriver::output(pins.gpio7)?; // Pins::DISPLAY_POWER
    display_power.set_high()?;
    FreeRtos::delay_ms(100); // Wait for power to stabilize

    log::info!("Configuring SPI at {} Hz", config.spi_baud_hz);
    let spi = spi::SpiDeviceDriver::new_single(
        peripherals.spi2,
        pins.gpio12,                                          // SCK - Pins::SCK
        pins.gpio11,                                          // MOSI - Pins::MOSI
        Option::<gpio::AnyIOPin>::None,                       // No MISO needed for display
        Some(pins.gpio45),                                    // CS - Pins::CS
        &spi::SpiDriverConfig::new().dma(spi::Dma::Disabled),
        &spi::SpiConfig::new().baudrate(config.spi_baud_hz.Hz()), // Mode0 is the esp-idf-hal default
    )
    .context("Could not create SPI device driver")?;

    let panel = WavesharePanel::new(
        spi,
        gpio::PinDriver::input(pins.gpio48)?,  // Pins::BSY
        gpio::PinDriver::output(pins.gpio46)?, // Pins::DC
        gpio::PinDriver::output(pins.gpio47)?, // Pins::RST
        Delay::default(),
        DisplayRotation::Rotate270,
    )
    .context("Could not create EPD driver")?;

    let mut task = DemoTask::new(panel, button, led, FreeRtos, config);
    match task.run() {
        Ok(never) => match never {},
        Err(e) => Err(anyhow::Error::from(e).context("demo task stopped")),
    }
}

// https://docs.esp-rs.org/esp-idf-svc/esp_idf_svc/
#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    // It is necessary to call this function once. Otherwise some patches to the runtime
    // implemented by esp-idf-sys might not link properly. See https://github.com/esp-rs/esp-idf-template/issues/71
    esp_idf_svc::sys::link_patches();

    // Bind the log crate to the ESP Logging facilities
    esp_idf_svc::log::EspLogger::initialize_default();

    let peripherals = Peripherals::take().context("Could not take peripherals")?;
    let config = DemoConfig::default();

    let handle = std::thread::Builder::new()
        .name("eink".into())
        .stack_size(EINK_TASK_STACK_SIZE)
        .spawn(move || eink_task(peripherals, config))?;

    let result = handle
        .join()
        .map_err(|_| anyhow::anyhow!("eink task panicked"))?;
    if let Err(e) = &result {
        log::error!("{:?}", e);
    }
    result
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    eprintln!(
        "{} drives ESP32-S3 hardware; build it with --target xtensa-esp32s3-espidf",
        env!("CARGO_PKG_NAME")
    );
}
