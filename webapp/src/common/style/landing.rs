pub const LANDING_STYLES: &str = r#"
/* Landing Page Styles */

.page {
  min-height: 100vh;
  background: var(--background);
  color: var(--text-primary);
  transition: color var(--transition-theme), background var(--transition-theme);
}

/* Navigation */
.site-nav {
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  z-index: 50;
  background: transparent;
  transition: all var(--transition-normal) var(--easing-standard);
}

.site-nav.scrolled {
  background: var(--nav-scrolled);
  backdrop-filter: blur(16px);
  box-shadow: var(--shadow-md);
}

.nav-container {
  max-width: var(--nav-width);
  margin: 0 auto;
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: var(--space-4) var(--space-6);
}

.brand {
  font-size: 1.5rem;
  font-weight: 700;
  letter-spacing: 0.025em;
}

.nav-desktop {
  display: flex;
  align-items: center;
  gap: var(--space-6);
}

.nav-links {
  display: flex;
  gap: var(--space-8);
  list-style: none;
  font-size: 1.125rem;
}

.nav-link {
  position: relative;
  cursor: pointer;
}

.nav-link:hover {
  color: var(--accent);
}

.nav-underline {
  position: absolute;
  left: 0;
  bottom: -4px;
  width: 0;
  height: 2px;
  background-color: var(--accent);
  transition: width var(--transition-normal);
}

.nav-link:hover .nav-underline {
  width: 100%;
}

.icon-button {
  background: none;
  border: none;
  color: inherit;
  cursor: pointer;
  line-height: 1;
}

.theme-toggle {
  padding: var(--space-2);
  border-radius: var(--radius-full);
  font-size: 22px;
  transition: background-color var(--transition-fast);
}

.theme-toggle:hover {
  background-color: var(--toggle-hover);
}

.menu-toggle {
  display: none;
  font-size: 28px;
}

.nav-mobile {
  display: none;
  list-style: none;
  text-align: center;
  padding: var(--space-8) 0;
  font-size: 1.25rem;
  background: var(--menu);
  backdrop-filter: blur(12px);
  animation: drop-in var(--transition-normal) var(--easing-standard);
}

.nav-mobile li + li {
  margin-top: var(--space-6);
}

.nav-mobile li:hover {
  color: var(--accent);
}

/* Hero */
.hero {
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  text-align: center;
  max-width: var(--content-width);
  margin: 0 auto;
  padding: var(--space-32) var(--space-6) var(--space-20);
}

.hero-title {
  font-size: 3.75rem;
  font-weight: 700;
  line-height: 1.25;
  margin-bottom: var(--space-6);
  animation: rise-in 0.8s var(--easing-standard) both;
  --rise: 40px;
}

.hero-subtitle {
  font-size: 1.25rem;
  color: var(--text-secondary);
  max-width: 42rem;
  margin-bottom: var(--space-10);
  animation: rise-in 1s var(--easing-standard) 0.2s both;
  --rise: 20px;
}

.cta {
  padding: var(--space-4) var(--space-8);
  background-color: var(--accent);
  color: #000000;
  font-weight: 600;
  font-size: 1rem;
  border: none;
  border-radius: var(--radius-2xl);
  box-shadow: var(--shadow-lg);
  cursor: pointer;
  transition: all var(--transition-normal);
}

.cta:hover {
  background-color: var(--accent-light);
  transform: scale(1.05);
}

.cta:active {
  transform: scale(0.95);
}

/* Logo strip */
.logo-strip {
  background: var(--strip);
  overflow: hidden;
  white-space: nowrap;
  padding: var(--space-10) 0;
}

.logo-track {
  display: flex;
  gap: var(--space-20);
  animation: marquee var(--marquee-duration) linear infinite;
}

.logo-track img {
  height: 64px;
}

/* Content sections */
.content-section {
  max-width: var(--content-width);
  margin: 0 auto;
  padding: var(--space-24) var(--space-6);
  text-align: center;
}

.section-title {
  font-size: 2.25rem;
  font-weight: 700;
  margin-bottom: var(--space-6);
  --rise: 40px;
}

.section-text {
  --reveal-delay: 0.2s;
  --reveal-duration: 0.9s;
  font-size: 1.125rem;
  color: var(--text-secondary);
  margin-bottom: var(--space-10);
  --rise: 20px;
}

.project-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: var(--space-6);
  margin-top: var(--space-10);
}

.project-card {
  background: var(--surface);
  border-radius: var(--radius-2xl);
  box-shadow: var(--shadow-lg);
  padding: var(--space-10);
  transition: transform var(--transition-normal);
}

.project-card:hover {
  transform: scale(1.05);
}

.project-card h4 {
  font-size: 1.25rem;
  font-weight: 600;
  margin-bottom: var(--space-2);
}

.project-card p {
  color: var(--text-muted);
}

.skill-row {
  display: flex;
  justify-content: center;
  align-items: center;
  gap: var(--space-8);
  margin-top: var(--space-10);
}

.skill-badge {
  width: 12rem;
  padding: var(--space-8) var(--space-6);
  background: linear-gradient(to top right, var(--accent), var(--accent-dark));
  color: #000000;
  font-weight: 700;
  text-align: center;
  border-radius: var(--radius-2xl);
  box-shadow: var(--shadow-xl);
  --rise: 20px;
}

/* entrance on first entering the viewport; .visible is added once and never removed */
.reveal {
  opacity: 0;
  transform: translateY(var(--rise, 20px));
  transition: opacity var(--reveal-duration, 0.7s) var(--easing-standard),
              transform var(--reveal-duration, 0.7s) var(--easing-standard);
  transition-delay: var(--reveal-delay, 0s);
}

.reveal.visible {
  opacity: 1;
  transform: translateY(0);
}

.site-footer {
  text-align: center;
  padding: var(--space-10) var(--space-6);
  color: var(--text-secondary);
}

.not-found {
  text-align: center;
  padding: var(--space-32) var(--space-6);
}

.not-found a {
  color: var(--accent);
}

@keyframes rise-in {
  from {
    opacity: 0;
    transform: translateY(var(--rise, 20px));
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

@keyframes drop-in {
  from {
    opacity: 0;
    transform: translateY(-20px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

@keyframes marquee {
  from {
    transform: translateX(100%);
  }
  to {
    transform: translateX(-100%);
  }
}

/* Responsive */
@media (max-width: 767.98px) {
  .nav-desktop {
    display: none;
  }

  .menu-toggle {
    display: block;
  }

  .nav-mobile {
    display: block;
  }

  .hero-title {
    font-size: 3rem;
  }

  .hero-subtitle {
    font-size: 1.125rem;
  }

  .skill-row {
    flex-direction: column;
  }
}

@media (max-width: 639.98px) {
  .project-grid {
    grid-template-columns: 1fr;
  }
}
"#;
