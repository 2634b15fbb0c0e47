// startup overlay, kept in its own stylesheet so the app shell can inject
// it ahead of everything else
pub const LOADER_STYLES: &str = r#"
.loading-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  background: linear-gradient(180deg, #FFFFFF, #EFF6FF);
  opacity: 1;
  transition: opacity 500ms var(--easing-standard);
}

/* fade out in place, then stop intercepting input */
.loading-overlay.done {
  opacity: 0;
  visibility: hidden;
  pointer-events: none;
  transition: opacity 500ms var(--easing-standard),
              visibility 0s 500ms;
}

.theme-dark .loading-overlay {
  background: linear-gradient(180deg, #111827, #1E2A4A);
}

.loading-stack {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-6);
}

.loading-mark {
  position: relative;
}

.loading-cube {
  width: 56px;
  height: 56px;
  border-radius: var(--radius-xl);
  background-color: rgba(59, 130, 246, 0.9);
  box-shadow: 0 10px 25px rgba(59, 130, 246, 0.3);
  animation: cube-spin 1.6s ease-in-out infinite;
}

.loading-glow {
  position: absolute;
  inset: -8px;
  border-radius: var(--radius-xl);
  background-color: rgba(96, 165, 250, 0.2);
  filter: blur(16px);
  animation: glow-pulse 2.2s ease-in-out infinite;
}

.loading-track {
  width: 224px;
  height: 8px;
  border-radius: var(--radius-full);
  background-color: var(--neutral-200);
  overflow: hidden;
}

.theme-dark .loading-track {
  background-color: var(--neutral-700);
}

.loading-sweep {
  height: 100%;
  width: 100%;
  background-color: var(--primary);
  animation: sweep 1.6s ease-in-out infinite;
}

.loading-text {
  margin-top: var(--space-3);
  font-size: 0.875rem;
  color: var(--text-secondary);
  text-align: center;
}

@keyframes cube-spin {
  0% {
    transform: rotate(0deg) scale(0.9);
  }
  100% {
    transform: rotate(360deg) scale(1);
  }
}

@keyframes glow-pulse {
  0%, 100% {
    opacity: 0.6;
  }
  50% {
    opacity: 0.2;
  }
}

@keyframes sweep {
  0% {
    transform: translateX(-100%);
  }
  50% {
    transform: translateX(0%);
  }
  100% {
    transform: translateX(100%);
  }
}
"#;
