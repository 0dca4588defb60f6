//! The single-page frontend served at `/`.
//!
//! Prompt form and theme options on the left, preview/editor on the right.
//! All rendering goes through `/extract` and `/preview`; the page itself only
//! keeps the editable code and the current theme.

pub(crate) const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>pagesmith</title>
<style>
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:ui-sans-serif,system-ui,sans-serif;display:flex;min-height:100vh;background:#f9fafb}
aside{width:25%;min-width:280px;height:100vh;position:fixed;left:0;top:0;overflow-y:auto;background:#111827;color:#fff;padding:24px}
aside h1{font-size:1.8rem;text-align:center;margin-bottom:24px}
label{display:block;font-size:.85rem;margin:12px 0 4px}
input[type=text],select,textarea{width:100%;padding:10px;border:1px solid #4b5563;border-radius:4px;background:#fff;color:#111827;font:inherit}
.options{background:#1f2937;padding:12px;border-radius:4px;margin-top:8px}
.options select,.options input[type=text]{background:#374151;color:#fff}
.color-row{display:flex;gap:8px;align-items:center}
.color-row input[type=color]{width:40px;height:40px;border:0;padding:0;cursor:pointer}
button{cursor:pointer;border:0;border-radius:4px;padding:8px 16px;font:inherit}
.btn-wide{width:100%;margin-top:12px}
.btn-primary{background:#3b82f6;color:#fff}.btn-primary:hover{background:#2563eb}
.btn-primary:disabled{background:#6b7280;cursor:not-allowed}
.btn-muted{background:#374151;color:#fff}
.error{margin-top:16px;background:#fee2e2;color:#b91c1c;padding:12px;border-radius:4px}
.error pre{white-space:pre-wrap;overflow-x:auto}
main{margin-left:25%;width:75%;height:100vh;display:flex;flex-direction:column}
.bar{display:flex;justify-content:space-between;align-items:center;padding:16px;background:#fff;border-bottom:1px solid #e5e7eb}
.tab{background:#e5e7eb;color:#374151;margin-left:8px}.tab.active{background:#3b82f6;color:#fff}
.pane{flex:1;min-height:0}
iframe{width:100%;height:100%;border:0;display:block;background:#fff}
.editor{display:flex;flex-direction:column;height:100%;background:#1e1e1e}
.editor textarea{flex:1;background:#1e1e1e;color:#d4d4d4;border:0;border-radius:0;font-family:ui-monospace,monospace;font-size:.85rem;padding:16px;resize:none}
.editor .actions{display:flex;justify-content:flex-end;padding:8px;background:#1f2937}
.empty{flex:1;display:flex;align-items:center;justify-content:center;color:#6b7280}
.hidden{display:none!important}
</style>
</head>
<body>
<aside>
  <h1>Webpage Generator</h1>
  <form id="form">
    <input id="prompt" type="text" placeholder="Describe your webpage or component...">
    <label for="type">Generation Type</label>
    <select id="type">
      <option value="html">HTML Page</option>
      <option value="react">React Component</option>
    </select>
    <button type="button" id="toggle-options" class="btn-muted btn-wide">Show Theme Options</button>
    <div id="options" class="options hidden">
      <label for="theme">Theme</label>
      <select id="theme">
        <option value="light">Light</option>
        <option value="dark">Dark</option>
        <option value="colorful">Colorful Gradient</option>
      </select>
      <label for="font">Font Family</label>
      <select id="font">
        <option value="sans">Sans-serif</option>
        <option value="serif">Serif</option>
        <option value="mono">Monospace</option>
      </select>
      <label for="color-text">Primary Color</label>
      <div class="color-row">
        <input id="color-picker" type="color" value="#3B82F6">
        <input id="color-text" type="text" value="#3B82F6">
      </div>
    </div>
    <button type="submit" id="submit" class="btn-primary btn-wide" disabled>Generate</button>
  </form>
  <div id="error" class="error hidden"><strong>Error:</strong><pre id="error-text"></pre></div>
</aside>
<main>
  <div id="empty" class="empty">Generated content will appear here</div>
  <div id="workspace" class="hidden" style="display:flex;flex-direction:column;height:100%">
    <div class="bar">
      <span id="model"></span>
      <div>
        <button id="tab-preview" class="tab active">Preview</button>
        <button id="tab-code" class="tab">Edit Code</button>
      </div>
    </div>
    <div id="pane-preview" class="pane">
      <iframe id="preview" title="Preview" sandbox="allow-scripts allow-forms allow-popups"></iframe>
    </div>
    <div id="pane-code" class="pane hidden">
      <div class="editor">
        <textarea id="code" spellcheck="false"></textarea>
        <div class="actions"><button id="apply" class="btn-primary">Apply Changes</button></div>
      </div>
    </div>
  </div>
</main>
<script>
(function () {
  var $ = function (id) { return document.getElementById(id); };
  var state = { type: "html", code: "", loading: false };

  function themeConfig() {
    return { theme: $("theme").value, font: $("font").value, primaryColor: $("color-text").value };
  }

  function showError(message) {
    $("error-text").textContent = message;
    $("error").classList.toggle("hidden", !message);
  }

  function postJson(path, body) {
    return fetch(path, {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify(body)
    });
  }

  // Always re-render from the unchanged editable code.
  function renderPreview() {
    if (!state.code) return;
    postJson("/preview", { content: state.code, type: state.type, theme: themeConfig() })
      .then(function (res) {
        if (res.ok) return res.text();
        return res.json().then(function (data) { throw new Error(data.error || "Preview failed"); });
      })
      .then(function (doc) { showError(""); $("preview").srcdoc = doc; })
      .catch(function (err) { showError(err.message); });
  }

  function selectTab(tab) {
    $("tab-preview").classList.toggle("active", tab === "preview");
    $("tab-code").classList.toggle("active", tab === "code");
    $("pane-preview").classList.toggle("hidden", tab !== "preview");
    $("pane-code").classList.toggle("hidden", tab !== "code");
  }

  function setWorkspace(visible) {
    $("workspace").classList.toggle("hidden", !visible);
    $("empty").classList.toggle("hidden", visible);
  }

  function setLoading(loading) {
    state.loading = loading;
    $("submit").textContent = loading ? "Generating..." : "Generate";
    $("submit").disabled = loading || !$("prompt").value;
  }

  $("prompt").addEventListener("input", function () { setLoading(state.loading); });

  $("toggle-options").addEventListener("click", function () {
    var hidden = $("options").classList.toggle("hidden");
    this.textContent = hidden ? "Show Theme Options" : "Hide Theme Options";
  });

  $("form").addEventListener("submit", function (e) {
    e.preventDefault();
    var type = $("type").value;
    setLoading(true);
    showError("");
    postJson("/generate", { prompt: $("prompt").value, type: type })
      .then(function (res) {
        return res.json().then(function (data) {
          if (!res.ok) throw new Error(data.error || "Failed to generate content");
          return data;
        });
      })
      .then(function (data) {
        return postJson("/extract", { content: data.content, type: type })
          .then(function (res) { return res.json(); })
          .then(function (extracted) {
            state.type = type;
            state.code = extracted.content;
            $("code").value = state.code;
            $("model").textContent = data.modelUsed ? "Model Used: " + data.modelUsed : "";
            setWorkspace(true);
            selectTab("preview");
            renderPreview();
          });
      })
      .catch(function (err) {
        state.code = "";
        setWorkspace(false);
        showError(err.message);
      })
      .then(function () { setLoading(false); });
  });

  $("tab-preview").addEventListener("click", function () { selectTab("preview"); });
  $("tab-code").addEventListener("click", function () { selectTab("code"); });

  $("apply").addEventListener("click", function () {
    state.code = $("code").value;
    selectTab("preview");
    renderPreview();
  });

  $("color-picker").addEventListener("input", function () {
    $("color-text").value = this.value;
    renderPreview();
  });
  $("color-text").addEventListener("change", function () {
    if (/^#[0-9a-fA-F]{6}$/.test(this.value)) $("color-picker").value = this.value;
    renderPreview();
  });
  $("theme").addEventListener("change", renderPreview);
  $("font").addEventListener("change", renderPreview);
})();
</script>
</body>
</html>
"##;
