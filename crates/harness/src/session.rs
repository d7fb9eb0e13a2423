//! Browser session lifecycle and the operations cases drive it with
//!
//! A session is one browser process, acquired at the start of a test case
//! and released unconditionally when the case ends. Sessions are never
//! shared or reused across cases.

use std::time::{Duration, Instant};

use thirtyfour::error::WebDriverError;
use thirtyfour::prelude::*;
use tracing::debug;

use crate::config::SessionConfig;
use crate::error::{HarnessError, HarnessResult};
use crate::locator::Locator;
use crate::site::{Page, Site};
use crate::wait::Wait;

/// One browser instance, controlled for the duration of a single test case.
pub struct BrowserSession {
    driver: WebDriver,
    site: Site,
    wait: Wait,
}

impl BrowserSession {
    /// Acquire a fresh browser against a running WebDriver server.
    ///
    /// Acquisition failure is a setup error, distinct from any assertion
    /// outcome; the caller reports it as an errored case.
    pub async fn start(
        webdriver_url: &str,
        site: Site,
        config: &SessionConfig,
    ) -> HarnessResult<Self> {
        let mut caps = DesiredCapabilities::chrome();
        if config.maximized {
            caps.add_arg("--start-maximized").map_err(setup_error)?;
        }
        if config.suppress_automation_flags {
            caps.add_arg("--disable-blink-features=AutomationControlled")
                .map_err(setup_error)?;
        }
        if config.headless {
            caps.add_arg("--headless=new").map_err(setup_error)?;
            // Headless windows cannot maximize; pin a desktop-sized viewport
            caps.add_arg("--window-size=1920,1080").map_err(setup_error)?;
        }

        let driver = WebDriver::new(webdriver_url, caps)
            .await
            .map_err(|e| HarnessError::Session(e.to_string()))?;

        driver.set_implicit_wait_timeout(config.implicit_wait).await?;

        debug!("browser session acquired");
        Ok(Self {
            driver,
            site,
            wait: config.wait,
        })
    }

    /// The deployment this session is pointed at.
    pub fn site(&self) -> &Site {
        &self.site
    }

    /// Polling policy shared by readiness waits and eventually-checks.
    pub fn wait(&self) -> Wait {
        self.wait
    }

    /// Navigate to one of the site's pages and wait for readiness.
    pub async fn open(&self, page: Page) -> HarnessResult<()> {
        self.navigate(&self.site.page_url(page)).await
    }

    /// Navigate to an arbitrary path under the site, valid or not.
    pub async fn open_path(&self, path: &str) -> HarnessResult<()> {
        self.navigate(&self.site.url_for(path)).await
    }

    /// Like [`open`](Self::open), reporting elapsed wall-clock time.
    pub async fn open_timed(&self, page: Page) -> HarnessResult<Duration> {
        let start = Instant::now();
        self.open(page).await?;
        Ok(start.elapsed())
    }

    /// Navigate to an absolute URL and block until the document reports
    /// itself complete.
    pub async fn navigate(&self, url: &str) -> HarnessResult<()> {
        debug!("navigating to {}", url);
        self.driver
            .goto(url)
            .await
            .map_err(|e| HarnessError::Navigation {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        self.wait_for_document_ready().await
    }

    async fn wait_for_document_ready(&self) -> HarnessResult<()> {
        let driver = &self.driver;
        self.wait
            .require("document ready", move || async move {
                let ret = driver
                    .execute("return document.readyState;", Vec::new())
                    .await?;
                Ok((ret.json().as_str() == Some("complete")).then_some(()))
            })
            .await
    }

    pub async fn title(&self) -> HarnessResult<String> {
        Ok(self.driver.title().await?)
    }

    pub async fn current_url(&self) -> HarnessResult<String> {
        Ok(self.driver.current_url().await?.to_string())
    }

    pub async fn page_source(&self) -> HarnessResult<String> {
        Ok(self.driver.source().await?)
    }

    /// Find one element. Absence after the implicit wait is an
    /// `ElementNotFound` naming the locator.
    pub async fn find(&self, locator: &Locator) -> HarnessResult<WebElement> {
        match self.driver.find(locator.to_by()).await {
            Ok(element) => Ok(element),
            Err(WebDriverError::NoSuchElement(_)) => Err(HarnessError::ElementNotFound {
                locator: locator.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Find all matching elements; an empty result is not an error.
    pub async fn find_all(&self, locator: &Locator) -> HarnessResult<Vec<WebElement>> {
        Ok(self.driver.find_all(locator.to_by()).await?)
    }

    /// Locate an element and click it.
    pub async fn click(&self, locator: &Locator) -> HarnessResult<()> {
        let element = self.find(locator).await?;
        element.click().await?;
        Ok(())
    }

    /// Resize the browser window.
    pub async fn set_viewport(&self, width: u32, height: u32) -> HarnessResult<()> {
        debug!("resizing viewport to {}x{}", width, height);
        self.driver.set_window_rect(0, 0, width, height).await?;
        Ok(())
    }

    /// Release the browser. Runs exactly once per acquired session; the
    /// runner calls this on every exit path.
    pub async fn quit(self) -> HarnessResult<()> {
        debug!("closing browser session");
        self.driver.quit().await?;
        Ok(())
    }
}

fn setup_error(e: WebDriverError) -> HarnessError {
    HarnessError::Session(e.to_string())
}
