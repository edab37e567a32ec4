#![cfg(feature = "async")]

use embassy_futures::block_on;
use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};
use ghostlab42_reboot::data_types::{CurrentLimit, Display};
use ghostlab42_reboot::driver::Reboot;
use ghostlab42_reboot::error::Error;

const FOUR: u8 = 0x63;
const SIX: u8 = 0x60;

fn commit(address: u8) -> I2cTrans {
    I2cTrans::write(address, vec![0x0C, 0x00])
}

#[test]
fn init_write_reset_brightness_sequence() {
    let expectations = [
        I2cTrans::write(FOUR, vec![0x0D, 0x0B]),
        I2cTrans::write(SIX, vec![0x0D, 0x0B]),
        I2cTrans::write(FOUR, vec![0x01, 0x77, 0x7C, 0x00, 0x00]),
        commit(FOUR),
        I2cTrans::write(SIX, vec![0xFF, 0x00]),
        I2cTrans::write(SIX, vec![0x0D, 0x0B]),
        I2cTrans::write(SIX, vec![0x19, 0x18]),
    ];
    let mut driver = Reboot::new(I2cMock::new(&expectations));
    block_on(async {
        driver.init_async().await.unwrap();
        driver.write_async(Display::FourDigit, "ab").await.unwrap();
        driver.reset_display_async(Display::SixDigit).await.unwrap();
        driver.set_brightness_async(Display::SixDigit, 50).await.unwrap();
    });
    assert_eq!(driver.current_limit(Display::SixDigit), Some(CurrentLimit::Max20mA));
    driver.free().done();
}

#[test]
fn write_bytes_and_clear_async() {
    let expectations = [
        I2cTrans::write(SIX, vec![0x01, 0x33, 0x27, 0x3C, 0x1E, 0x00, 0x00, 0x00, 0x00]),
        commit(SIX),
        I2cTrans::write(SIX, vec![0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
        commit(SIX),
    ];
    let mut driver = Reboot::new(I2cMock::new(&expectations));
    block_on(async {
        driver.write_bytes_async(Display::SixDigit, b"MW").await.unwrap();
        driver.clear_async(Display::SixDigit).await.unwrap();
    });
    driver.free().done();
}

#[test]
fn power_settings_async() {
    let expectations = [
        I2cTrans::write(FOUR, vec![0x0D, 0x08]),
        I2cTrans::write(FOUR, vec![0x0D, 0x0B]),
        I2cTrans::write(SIX, vec![0x0D, 0x08]),
    ];
    let mut driver = Reboot::new(I2cMock::new(&expectations));
    block_on(async {
        driver.set_power_min_async(Display::FourDigit).await.unwrap();
        assert_eq!(driver.current_limit(Display::FourDigit), Some(CurrentLimit::Min10mA));
        driver.set_power_max_async(Display::FourDigit).await.unwrap();
        driver
            .set_current_limit_async(Display::SixDigit, CurrentLimit::Min10mA)
            .await
            .unwrap();
    });
    assert_eq!(driver.current_limit(Display::FourDigit), Some(CurrentLimit::Max20mA));
    assert_eq!(driver.current_limit(Display::SixDigit), Some(CurrentLimit::Min10mA));
    driver.free().done();
}

#[test]
fn async_errors_match_blocking_behavior() {
    let expectations = [
        I2cTrans::write(FOUR, vec![0x01, 0x3F, 0x00, 0x00, 0x00]).with_error(ErrorKind::Other),
        I2cTrans::write(SIX, vec![0xFF, 0x00]).with_error(ErrorKind::Other),
    ];
    let mut driver = Reboot::new(I2cMock::new(&expectations));
    block_on(async {
        let err = driver.write_async(Display::FourDigit, "0").await.unwrap_err();
        assert!(matches!(err, Error::I2c(ErrorKind::Other)));
        let err = driver.reset_display_async(Display::SixDigit).await.unwrap_err();
        assert!(matches!(err, Error::I2c(ErrorKind::Other)));
        assert!(matches!(
            driver.set_brightness_async(Display::SixDigit, 101).await,
            Err(Error::OutOfRange)
        ));
    });
    assert_eq!(driver.current_limit(Display::SixDigit), None);
    driver.free().done();
}
