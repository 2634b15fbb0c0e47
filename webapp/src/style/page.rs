pub const PAGE_STYLES: &str = r#"
/* Page layout */
.site-root {
  min-height: 100vh;
  color: var(--text-primary);
  background-color: var(--background);
  transition: background-color var(--transition-normal) var(--easing-standard),
              color var(--transition-normal) var(--easing-standard);
}

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
}

section {
  padding: var(--space-16) 0;
}

/* Header chrome */
.site-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  background-color: transparent;
  transition: background-color var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.site-header.chrome {
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
  backdrop-filter: blur(8px);
}

.nav-inner {
  max-width: var(--container-width);
  margin: 0 auto;
  height: var(--header-height);
  padding: 0 var(--space-6);
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.brand {
  font-weight: 600;
  font-size: 1.125rem;
  letter-spacing: -0.01em;
}

.brand-suffix {
  color: var(--primary);
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-8);
}

.nav-link {
  color: var(--text-secondary);
  transition: color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  color: var(--primary);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.menu-toggle {
  display: none;
}

.mobile-menu {
  display: none;
}

/* Reading progress, pinned under the header */
.scroll-progress {
  height: 3px;
  background: linear-gradient(90deg, var(--primary), var(--accent));
  transition: width 80ms linear;
}

/* Hero */
.hero {
  position: relative;
  padding-top: calc(var(--header-height) + var(--space-16));
  background: linear-gradient(180deg, var(--hero-wash), transparent);
  overflow: hidden;
}

.hero-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-8);
  align-items: center;
}

.hero-title {
  margin-top: var(--space-4);
  font-size: 3.5rem;
  font-weight: 800;
  line-height: 1.1;
}

.hero-accent {
  color: var(--primary);
}

.hero-tagline {
  margin-top: var(--space-4);
  max-width: 36rem;
  font-size: 1.125rem;
  color: var(--text-secondary);
}

.hero-actions {
  margin-top: var(--space-6);
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-3);
}

.hero-meta {
  margin-top: var(--space-6);
  display: flex;
  align-items: center;
  gap: var(--space-4);
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.hero-meta .divider {
  width: 1px;
  height: 16px;
  background-color: var(--border);
}

.hero-scene {
  position: relative;
  height: 540px;
  border-radius: var(--radius-xl);
  overflow: hidden;
  box-shadow: var(--shadow-lg);
}

.scene-frame {
  width: 100%;
  height: 100%;
  border: none;
}

.scene-fade {
  pointer-events: none;
  position: absolute;
  inset: 0;
  background: linear-gradient(0deg, var(--background), transparent 40%);
}

/* Section scaffolding */
.section-head {
  max-width: 48rem;
  margin: 0 auto var(--space-12);
  text-align: center;
}

.section-kicker {
  text-transform: uppercase;
  letter-spacing: 0.2em;
  font-size: 0.75rem;
  font-weight: 600;
  color: var(--primary);
  margin-bottom: var(--space-2);
}

.section-title {
  font-size: 2.25rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
}

.section-subtitle {
  color: var(--text-secondary);
}

/* About */
.about {
  background: linear-gradient(180deg, transparent, var(--hero-wash));
}

.about-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-8);
}

.aux-scene {
  margin-top: var(--space-8);
  height: 260px;
  border-radius: var(--radius-xl);
  overflow: hidden;
  box-shadow: var(--shadow-md);
}

/* Skills */
.skills-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: var(--space-4);
}

.skill-chips {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

/* Projects */
.projects {
  background: linear-gradient(180deg, var(--hero-wash), transparent);
}

.projects-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-6);
}

.project-card {
  display: block;
}

.project-head {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  gap: var(--space-3);
}

.project-head svg {
  color: var(--text-tertiary);
  flex-shrink: 0;
}

.project-card:hover .project-head h3,
.project-card:hover .project-head svg {
  color: var(--primary);
}

.project-desc {
  margin-top: var(--space-2);
  color: var(--text-secondary);
}

.project-stack {
  margin-top: var(--space-4);
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

/* Contact */
.contact-grid {
  display: grid;
  grid-template-columns: 3fr 2fr;
  gap: var(--space-8);
  max-width: 64rem;
  margin: 0 auto;
}

.contact-aside {
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
}

.contact-blurb {
  margin-top: var(--space-2);
  text-align: center;
  font-size: 0.875rem;
  color: var(--text-secondary);
}

/* Footer */
.site-footer {
  border-top: 1px solid var(--border);
  padding: var(--space-10) 0;
}

.footer-inner {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: var(--space-4);
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.footer-links {
  display: flex;
  align-items: center;
  gap: var(--space-4);
}

.footer-links a:hover {
  color: var(--primary);
}

/* Floating back-to-top control */
.back-to-top {
  position: fixed;
  right: var(--space-6);
  bottom: var(--space-6);
  z-index: 40;
  width: 44px;
  height: 44px;
  border: none;
  border-radius: var(--radius-full);
  background-color: var(--primary);
  color: var(--text-inverse);
  display: flex;
  align-items: center;
  justify-content: center;
  cursor: pointer;
  box-shadow: var(--shadow-md);
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
}

.back-to-top:hover {
  background-color: var(--primary-dark);
  transform: translateY(-2px);
}

/* System check page */
.system-check {
  padding-top: calc(var(--header-height) + var(--space-10));
  max-width: 40rem;
  margin: 0 auto;
  padding-left: var(--space-6);
  padding-right: var(--space-6);
}

.check-list {
  margin-top: var(--space-6);
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
}

.check-row {
  display: flex;
  align-items: baseline;
  justify-content: space-between;
  gap: var(--space-4);
  padding: var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface);
}

.check-row .value {
  color: var(--text-secondary);
  font-size: 0.875rem;
  overflow-wrap: anywhere;
  text-align: right;
}

/* Small screens */
@media (max-width: 900px) {
  .hero-grid,
  .about-grid,
  .projects-grid,
  .contact-grid {
    grid-template-columns: 1fr;
  }

  .skills-grid {
    grid-template-columns: 1fr 1fr;
  }

  .hero-title {
    font-size: 2.5rem;
  }

  .hero-scene {
    height: 420px;
  }

  .nav-links,
  .nav-actions .icon-link {
    display: none;
  }

  .menu-toggle {
    display: inline-flex;
  }

  .mobile-menu {
    display: block;
    border-top: 1px solid var(--border);
    background-color: var(--surface);
    padding: var(--space-3) var(--space-6);
  }

  .mobile-menu a {
    display: block;
    padding: var(--space-2) 0;
    color: var(--text-secondary);
  }

  .mobile-menu a:hover {
    color: var(--primary);
  }

  .footer-inner {
    flex-direction: column;
  }
}

@media (max-width: 600px) {
  .skills-grid {
    grid-template-columns: 1fr;
  }
}
"#;
